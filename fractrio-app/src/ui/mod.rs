mod controls;
mod export;
mod hud;
