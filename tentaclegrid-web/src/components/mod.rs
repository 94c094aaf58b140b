pub mod adaptive_shell;
pub mod game_stage;
pub mod rotate_notice;
