pub mod app;
mod board;
mod button;
mod game;
mod slot;
