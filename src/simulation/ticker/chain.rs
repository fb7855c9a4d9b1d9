//! TickChain - self-rescheduling `setTimeout` chain (wasm only).
//!
//! One JS closure is created per start and reused for every tick in
//! that run: fire, check the gate, step, arm the next timeout. The
//! chain holds no strong reference to itself; the closure captures a
//! `Weak`, so dropping the chain both clears the pending timeout and
//! lets the closure die with it. The gate decides at fire time whether
//! a tick still counts; a stale epoch returns without touching the
//! board.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::SimulationCore;

pub(super) struct TickChain {
    timeout_id: RefCell<Option<i32>>,
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl TickChain {
    /// Arm the first timeout and hand the chain to the caller. The
    /// chain stays alive exactly as long as the returned `Rc` does.
    pub(super) fn start(core: Rc<RefCell<SimulationCore>>, epoch: u64) -> Rc<TickChain> {
        let chain = Rc::new(TickChain {
            timeout_id: RefCell::new(None),
            closure: RefCell::new(None),
        });

        let first_delay = core.borrow().tick_interval_ms();
        let weak: Weak<TickChain> = Rc::downgrade(&chain);
        let tick = Closure::wrap(Box::new(move || {
            let Some(chain) = weak.upgrade() else {
                return;
            };
            chain.timeout_id.borrow_mut().take();
            if !core.borrow().ticks_allowed(epoch) {
                return;
            }
            core.borrow_mut().step();
            let delay = core.borrow().tick_interval_ms();
            chain.arm(delay);
        }) as Box<dyn FnMut()>);

        *chain.closure.borrow_mut() = Some(tick);
        chain.arm(first_delay);
        chain
    }

    fn arm(&self, delay_ms: u32) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = self.closure.borrow();
        let Some(tick) = closure.as_ref() else {
            return;
        };
        if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            *self.timeout_id.borrow_mut() = Some(id);
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.timeout_id.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Drop for TickChain {
    fn drop(&mut self) {
        self.cancel();
    }
}
