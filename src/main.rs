use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect4_core::board::{Board, Cell};
use connect4_core::coordinate::Coordinate;
use connect4_core::{HEIGHT, WIDTH};

mod player;
use player::Strategy;

fn main() -> Result<()> {
    let mut board = Board::new();

    println!("Welcome to Connect 4\n");

    let mut players = [
        choose_strategy(1, Cell::PlayerOne)?,
        choose_strategy(2, Cell::PlayerTwo)?,
    ];
    let mut active = 0;

    // game loop
    loop {
        display(&board)?;

        if board.is_finished() {
            match board.winner() {
                Some(Cell::PlayerOne) => println!("Player 1 wins!"),
                Some(_) => println!("Player 2 wins!"),
                None => println!("Draw!"),
            }

            if !read_yes_no("Do you want to continue")? {
                break;
            }
            board.reset();
            active = 0;
            continue;
        }

        println!("Turn: Player {}", active + 1);
        let cell = if active == 0 {
            Cell::PlayerOne
        } else {
            Cell::PlayerTwo
        };

        let column = players[active].choose_column(&mut board)?;
        if let Err(err) = board.drop_token_checked(column, cell) {
            println!("{}", err);
            // try the move again
            continue;
        }
        active = (active + 1) % players.len();
    }
    Ok(())
}

fn choose_strategy(number: usize, color: Cell) -> Result<Strategy> {
    let stdin = stdin();
    loop {
        print!("Is player {} (h)uman, (r)andom or (a)i controlled? h/r/a: ", number);
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'h') => return Ok(Strategy::Human),
            Some(_letter @ 'r') => return Ok(Strategy::random()),
            Some(_letter @ 'a') => return Ok(Strategy::search(color)),
            _ => println!("Unknown answer given"),
        }
    }
}

fn read_yes_no(message: &str) -> Result<bool> {
    let stdin = stdin();
    loop {
        print!("{}? (y/n): ", message);
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("The value must be y or n"),
        }
    }
}

fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=WIDTH).map(|column| column.to_string()).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    for row in (0..HEIGHT as i32).rev() {
        for column in 0..WIDTH as i32 {
            let cell = board.cell(Coordinate::new(row, column));
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match cell {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
