pub mod bullet;
pub mod collision;
pub mod constants;
pub mod environment;
pub mod events;
pub mod explosion;
pub mod gamestate;
pub mod player;
