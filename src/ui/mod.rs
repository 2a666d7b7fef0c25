mod dragon;
pub mod game_scene;
pub mod title_scene;

use dragon_math::save_manager::CounterStore;
use dragon_math::{DragonGame, Screen};
use ratatui::Frame;

/// Main UI drawing function
pub fn draw_ui<S: CounterStore>(frame: &mut Frame, game: &DragonGame<S>) {
    let area = frame.size();

    match game.screen() {
        Screen::Title => {
            let progress = game.engine().progress();
            title_scene::draw_title(
                frame,
                area,
                game.sound_enabled(),
                progress.coins,
                progress.level.number(),
            );
        }
        Screen::Playing => game_scene::draw_game(frame, area, game),
        Screen::Paused => {
            game_scene::draw_game(frame, area, game);
            game_scene::draw_pause_overlay(frame);
        }
    }
}
