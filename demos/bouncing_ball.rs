//=========================================================================
// Bouncing Ball
//
// Drops a ball under gravity, bounces it off the floor and logs each
// drawn frame. A second scene takes over after a few bounces, and the
// game ends itself shortly after.
//
// Run with:
//   RUST_LOG=info cargo run --example bouncing_ball
//
//=========================================================================

use std::time::Duration;

use aetheric_runtime::logging::{init_logging, LoggingConfig};
use aetheric_runtime::prelude::*;
use log::info;

//=== Scenes ==============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DemoScene {
    Bounce,
    Rest,
}

impl SceneKey for DemoScene {}

//--- Renderer ------------------------------------------------------------

/// Stands in for a real renderer: logs the frame and position.
struct LogRenderer;

impl FrameRenderer<char> for LogRenderer {
    fn render_frame(&self, image: char, position: Vec2) {
        info!("[{}] at ({:.2}, {:.2})", image, position.x, position.y);
    }
}

//--- Bounce --------------------------------------------------------------

struct Bounce {
    body: RigidBody,
    sprite: AnimatedSprite<char, LogRenderer>,
    bounces: u32,
}

impl Bounce {
    fn new() -> Self {
        let mut spin = AnimationTimeline::new();
        for image in ['|', '/', '-', '\\'] {
            spin.append(image, Duration::from_millis(80));
        }

        Self {
            body: RigidBody::new(Vec2::new(0.0, 5.0), 1.0)
                .with_gravity()
                .with_velocity(Velocity::new(1.5, 0.0)),
            sprite: AnimatedSprite::new(spin, LogRenderer),
            bounces: 0,
        }
    }
}

impl Scene<DemoScene> for Bounce {
    fn on_start(&mut self) -> anyhow::Result<()> {
        info!("Ball dropped");
        Ok(())
    }

    fn on_update(
        &mut self,
        elapsed: Duration,
        context: &mut SceneContext<DemoScene>,
    ) -> anyhow::Result<()> {
        self.body.update(elapsed);

        if self.body.position.y < 0.0 {
            self.body.position.y = 0.0;
            let v = self.body.velocity.components();
            self.body
                .velocity
                .set_components(Vec2::new(v.x, -v.y * 0.7));
            self.bounces += 1;
            info!("Bounce #{}", self.bounces);
        }

        if self.bounces >= 3 {
            context.switch_to(DemoScene::Rest);
        }

        self.sprite.position = self.body.position;
        self.sprite.update(elapsed);
        Ok(())
    }

    fn on_draw(&mut self) -> anyhow::Result<()> {
        self.sprite.prepare();
        self.sprite.draw();
        Ok(())
    }

    fn on_stop(&mut self) {
        self.sprite.stop_animation();
    }
}

//--- Rest ----------------------------------------------------------------

#[derive(Default)]
struct Rest {
    resting: Duration,
}

impl Scene<DemoScene> for Rest {
    fn on_update(
        &mut self,
        elapsed: Duration,
        context: &mut SceneContext<DemoScene>,
    ) -> anyhow::Result<()> {
        self.resting += elapsed;
        if self.resting >= Duration::from_millis(500) {
            context.end_game();
        }
        Ok(())
    }
}

//=== Callbacks ===========================================================

struct Announcer;

impl GameCallbacks for Announcer {
    fn on_start(&mut self) {
        info!("Game started");
    }

    fn on_over(&mut self) {
        info!("Game over");
    }
}

//=== Main ================================================================

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut game = GameBuilder::new()
        .with_fps(30)
        .with_scene(DemoScene::Bounce, Bounce::new())
        .with_scene(DemoScene::Rest, Rest::default())
        .with_initial_scene(DemoScene::Bounce)
        .with_callbacks(Announcer)
        .build()?;

    game.start()?;
    game.join()?;

    Ok(())
}
