// Game entities: the player-controlled dino

pub mod dino;
