//! Main application for the Gobang GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::board::Side;
use crate::session::Session;

/// Main Gobang application
pub struct GobangApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for GobangApp {
    fn default() -> Self {
        Self::with_session(Session::in_memory())
    }
}

impl GobangApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: Session) -> Self {
        Self::with_session(session)
    }

    fn with_session(session: Session) -> Self {
        Self {
            state: GameState::new(session),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                });
            });
        });
    }

    /// Render the side panel with score, result and notices
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                if self.state.game_over().is_some() {
                    self.render_result_card(ui);
                    ui.add_space(10.0);
                }

                if self.show_debug {
                    self.render_debug_card(ui);
                    ui.add_space(10.0);
                }

                if let Some(msg) = self.state.message.clone() {
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOBANG").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row, 15 x 15").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(32.0), egui::Sense::hover());
                let (fill, status) = if self.state.is_human_turn() {
                    (PLAYER_STONE, "Your turn")
                } else if self.state.game_over().is_some() {
                    (TEXT_MUTED, "Game over")
                } else {
                    (COMPUTER_STONE, "AI to move")
                };
                ui.painter().circle_filled(rect.center(), STONE_RADIUS, fill);
                ui.add_space(8.0);
                ui.label(RichText::new(status).size(16.0).strong().color(TEXT_PRIMARY));
            });
        });
    }

    /// "Player: n -- AI: m"
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new(self.state.tally().to_string()).size(16.0).color(TEXT_PRIMARY));
            ui.add_space(4.0);
            let moves = self.state.session.game().move_count();
            ui.label(RichText::new(format!("Move #{}", moves)).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_result_card(&mut self, ui: &mut egui::Ui) {
        let Some(text) = self.state.result_text() else {
            return;
        };
        let fill = match self.state.game_over().and_then(|over| over.winner) {
            Some(Side::Player) => RESULT_WIN_BG,
            Some(Side::Computer) => RESULT_LOSS_BG,
            None => RESULT_DRAW_BG,
        };

        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(text).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(8.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.state.session.game().last_ai_result() {
                Some(result) => {
                    if let Some(pos) = result.best_move {
                        ui.label(RichText::new(format!("-> {}", pos)).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                    ui.label(
                        RichText::new(format!("human {} / ai {}", result.score.human, result.score.ai))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new(format!("{:?}, {}us", result.kind, result.time_us))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }
                None => {
                    ui.label(RichText::new("No move yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(NOTICE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(12.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if let Some((row, col)) = self.board_view.show(ui, self.state.session.game()) {
                self.state.try_place_stone(row, col);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_debug) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::D)));

        if new_game {
            self.state.reset();
        }
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
