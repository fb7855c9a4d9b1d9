pub mod life;
