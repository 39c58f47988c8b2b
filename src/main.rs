use anyhow::Result;
use glam::IVec2;
use log::info;

mod core;
mod game;

use crate::core::config::GameConfig;
use crate::core::geometry::Rect;
use game::dino::{Dino, DinoState};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Dino Rush (headless demo)...");

    let config = GameConfig::standard();
    config.validate()?;

    let mut dino = Dino::new(&config);
    info!(
        "Dino waiting at {:?}, ground y = {}",
        dino.position(),
        dino.ground_y()
    );

    // Idle on the start screen for a few frames.
    for _ in 0..4 {
        dino.update();
    }

    // Full jump arc.
    dino.start_jump();
    let mut ticks = 0;
    while dino.state().is_jumping() {
        dino.update();
        ticks += 1;
    }
    info!(
        "Jump landed after {} ticks at y = {}",
        ticks,
        dino.position().y
    );

    // Duck under an imaginary pterodactyl.
    dino.start_duck();
    dino.update();
    info!(
        "Ducking at {} fps, collision box = {:?}, sheet offset = {:?}",
        dino.frame_rate(),
        dino.collision_box(),
        dino.sprite_offset()
    );
    dino.end_duck();
    dino.update();

    // Run straight into a cactus.
    let cactus = Rect::new(120, config.ground_y(35), 17, 35);
    if dino.collision_box().intersects(&cactus) {
        dino.update_with(DinoState::Crashed);
    }
    let frame = dino.sprite_frame(IVec2::ZERO);
    info!(
        "Crashed (was {:?}), final sprite source = {:?}",
        dino.pre_crash_state(),
        frame.source
    );

    Ok(())
}
