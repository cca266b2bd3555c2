use tresraya_core::{Cell, Game, Grid, Player};

fn mark_char(cell: Cell) -> char {
    match cell.mark() {
        None => ' ',
        Some(Player::X) => 'X',
        Some(Player::O) => 'O',
    }
}

/// The grid in the classic three-wide layout:
///
/// ```text
///  X |   | O
/// ---+---+---
///    | X |
/// ---+---+---
///    |   | O
/// ```
pub fn grid(grid: &Grid) -> String {
    let rows: Vec<String> = grid
        .rows()
        .map(|row| format!(" {} | {} | {} ", mark_char(row[0]), mark_char(row[1]), mark_char(row[2])))
        .collect();
    rows.join("\n---+---+---\n")
}

/// Coordinate cheat sheet shown once at startup, row before column.
pub fn index_help() -> String {
    [
        "Moves are typed as `row col`:",
        "",
        " 0 0 | 0 1 | 0 2 ",
        "-----+-----+-----",
        " 1 0 | 1 1 | 1 2 ",
        "-----+-----+-----",
        " 2 0 | 2 1 | 2 2 ",
    ]
    .join("\n")
}

/// Prompt for the player about to move, with their display name when set.
pub fn turn_prompt(game: &Game) -> String {
    let player = game.current_player();
    match game.player_name(player) {
        Some(name) => format!("Player {player} ({name}), enter row and column (0-2): "),
        None => format!("Player {player}, enter row and column (0-2): "),
    }
}

/// End-of-game announcement, or `None` while play continues. A winning line
/// beats a full grid.
pub fn outcome_line(game: &Game) -> Option<String> {
    if let Some(winner) = game.winner() {
        Some(match game.player_name(winner) {
            Some(name) => format!("Player {winner} ({name}) wins!"),
            None => format!("Player {winner} wins!"),
        })
    } else if game.is_draw() {
        Some("It's a draw!".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_after(moves: &[(u8, u8)]) -> Game {
        let mut game = Game::new();
        for &coords in moves {
            game.place_mark(coords).unwrap();
        }
        game
    }

    #[test]
    fn renders_marks_in_the_three_wide_layout() {
        let game = game_after(&[(0, 0), (1, 1), (2, 2)]);
        let expected = concat!(
            " X |   |   \n",
            "---+---+---\n",
            "   | O |   \n",
            "---+---+---\n",
            "   |   | X ",
        );
        assert_eq!(grid(game.grid()), expected);
    }

    #[test]
    fn renders_an_empty_grid() {
        let game = Game::new();
        let expected = concat!(
            "   |   |   \n",
            "---+---+---\n",
            "   |   |   \n",
            "---+---+---\n",
            "   |   |   ",
        );
        assert_eq!(grid(game.grid()), expected);
    }

    #[test]
    fn no_outcome_while_play_continues() {
        assert_eq!(outcome_line(&Game::new()), None);
        assert_eq!(outcome_line(&game_after(&[(0, 0), (1, 1)])), None);
    }

    #[test]
    fn announces_a_win() {
        let game = game_after(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(outcome_line(&game), Some("Player X wins!".to_string()));
    }

    #[test]
    fn announces_a_win_with_the_display_name() {
        let mut game = game_after(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        game.set_player_name(Player::X, "Ada");
        assert_eq!(outcome_line(&game), Some("Player X (Ada) wins!".to_string()));
    }

    #[test]
    fn announces_a_draw() {
        let game = game_after(&[
            (0, 0), (0, 1), (0, 2),
            (1, 1), (1, 0), (1, 2),
            (2, 1), (2, 0), (2, 2),
        ]);
        assert_eq!(outcome_line(&game), Some("It's a draw!".to_string()));
    }

    #[test]
    fn a_win_on_the_final_cell_is_announced_as_a_win() {
        let game = game_after(&[
            (0, 0), (0, 1), (1, 2),
            (0, 2), (2, 0), (1, 0),
            (2, 1), (1, 1), (2, 2),
        ]);
        assert!(game.is_draw());
        assert_eq!(outcome_line(&game), Some("Player X wins!".to_string()));
    }

    #[test]
    fn prompt_names_the_player_to_move() {
        let mut game = game_after(&[(0, 0)]);
        assert_eq!(turn_prompt(&game), "Player O, enter row and column (0-2): ");
        game.set_player_name(Player::O, "Grace");
        assert_eq!(turn_prompt(&game), "Player O (Grace), enter row and column (0-2): ");
    }
}
