//! Terminal output formatting
//!
//! Colored tiles, keyboard and result printers for the line-based front end
//! and the one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_help, print_keyboard, print_new_game, print_outcome,
    print_prompt, print_rejection, print_simulation_result, print_statistics,
};
pub use formatters::{KEYBOARD_ROWS, share_text};
