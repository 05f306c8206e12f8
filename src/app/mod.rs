mod error;

pub use error::AppError;

use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
};

use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal,
};
use rand::Rng;
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    dungeon::{Dungeon, Point},
    generators::{CaveParams, Generator},
    solvers::Solver,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuChoice {
    Generate(Generator),
    Route(Solver),
    Print,
    Exit,
}

/// Line-oriented menu driving one dungeon.
pub struct App<R, W> {
    input: R,
    output: W,
    cave_params: CaveParams,
    /// Colour the map and clip it to the terminal width
    color: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Lines of the menu shown before every choice
    const MENU: [&'static str; 9] = [
        "=====================================================",
        "  Procedural Dungeon & Pathfinding Visualizer",
        "=====================================================",
        "1. Generate Dungeon (Cellular Automata)",
        "2. Generate Dungeon (Recursive Backtracker)",
        "3. Find Path (A* Search)",
        "4. Find Path (Dijkstra's Algorithm)",
        "5. Print Current Dungeon",
        "6. Exit",
    ];

    pub fn new(input: R, output: W, cave_params: CaveParams, color: bool) -> Self {
        Self {
            input,
            output,
            cave_params,
            color,
        }
    }

    /// Reads one line, without the trailing newline. `None` at end of input.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prints a one-line message, coloured when colour is on.
    fn say(&mut self, text: &str, color: Color) -> std::io::Result<()> {
        if self.color {
            queue!(
                self.output,
                style::PrintStyledContent(style::style(text).with(color).attribute(Attribute::Bold)),
                style::Print("\n")
            )?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        self.output.flush()
    }

    /// Asks for a seed. A blank or unreadable answer picks a random one.
    pub fn ask_seed(&mut self) -> std::io::Result<u32> {
        let answer = self.prompt("Enter a number to seed the random generator (blank for random): ")?;
        match answer.as_deref().map(str::parse::<u32>) {
            Some(Ok(seed)) => Ok(seed),
            _ => {
                let seed = rand::rng().random::<u32>();
                tracing::info!("[app] no usable seed given, drew {}", seed);
                self.say(&format!("Using random seed {}", seed), Color::Blue)?;
                Ok(seed)
            }
        }
    }

    /// Main menu loop. Returns when the user exits or input runs out.
    pub fn run(&mut self, seed: u32) -> std::io::Result<()> {
        tracing::info!("[app] started main loop with seed {}", seed);
        let mut dungeon = Dungeon::new(seed);
        let mut generated = false;

        loop {
            for line in Self::MENU {
                writeln!(self.output, "{}", line)?;
            }
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                tracing::info!("[app] input closed");
                writeln!(self.output)?;
                break;
            };

            match self.handle(&choice, &mut dungeon, &mut generated) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(AppError::Io(e)) => return Err(e),
                Err(e) => {
                    tracing::warn!("[app] {}", e);
                    self.say(&format!("Error: {}", e), Color::Yellow)?;
                }
            }
        }

        self.say("Exiting program. Goodbye!", Color::Green)?;
        tracing::info!("[app] exiting main loop");
        Ok(())
    }

    fn parse_choice(&self, choice: &str) -> Result<MenuChoice, AppError> {
        match choice {
            "1" => Ok(MenuChoice::Generate(Generator::CellularAutomata(
                self.cave_params,
            ))),
            "2" => Ok(MenuChoice::Generate(Generator::RecurBacktrack)),
            "3" => Ok(MenuChoice::Route(Solver::AStar)),
            "4" => Ok(MenuChoice::Route(Solver::Dijkstra)),
            "5" => Ok(MenuChoice::Print),
            "6" => Ok(MenuChoice::Exit),
            other => Err(AppError::InvalidChoice(other.to_string())),
        }
    }

    fn handle(
        &mut self,
        choice: &str,
        dungeon: &mut Dungeon,
        generated: &mut bool,
    ) -> Result<ControlFlow<()>, AppError> {
        match self.parse_choice(choice)? {
            MenuChoice::Generate(generator) => {
                dungeon.generate(generator);
                *generated = true;
                tracing::info!("[app] generated dungeon with {}", generator);
                self.say(
                    &format!("Dungeon generated with {}.", generator),
                    Color::Green,
                )?;
                self.print_dungeon(dungeon)?;
            }
            MenuChoice::Route(solver) => {
                if !*generated {
                    return Err(AppError::NoDungeon);
                }
                self.route(dungeon, solver)?;
            }
            MenuChoice::Print => self.print_dungeon(dungeon)?,
            MenuChoice::Exit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn ask_point(&mut self, text: &str) -> Result<Point, AppError> {
        let answer = self.prompt(text)?.unwrap_or_default();
        parse_point(&answer)
    }

    /// Routes on a copy of the dungeon so the generated map stays clean.
    fn route(&mut self, dungeon: &Dungeon, solver: Solver) -> Result<(), AppError> {
        let start = self.ask_point("Enter Start X Y (e.g., 1 1): ")?;
        let end = self.ask_point(&format!(
            "Enter End X Y (e.g., {} {}): ",
            dungeon.width() - 2,
            dungeon.height() - 2
        ))?;
        if !dungeon.in_bounds(start) || !dungeon.in_bounds(end) {
            return Err(AppError::OutOfBounds { start, end });
        }

        let mut working = dungeon.clone();
        match working.find_route(start, end, solver) {
            Some(route) => {
                tracing::info!(
                    "[app] {} found a {} step route from {} to {}",
                    solver,
                    route.steps(),
                    start,
                    end
                );
                self.say(
                    &format!("Path found! {} steps with {}.", route.steps(), solver),
                    Color::Green,
                )?;
            }
            None => {
                tracing::info!("[app] {} found no route from {} to {}", solver, start, end);
                self.say("Path not found.", Color::Red)?;
            }
        }
        working.mark_endpoints(start, end);
        self.print_dungeon(&working)?;
        Ok(())
    }

    /// Terminal width to clip to, only when drawing for a terminal.
    fn max_width(&self) -> Option<usize> {
        if !self.color {
            return None;
        }
        terminal::size().ok().map(|(width, _)| width as usize)
    }

    fn print_dungeon(&mut self, dungeon: &Dungeon) -> std::io::Result<()> {
        let lines = dungeon.render_to_text();
        let max_width = self.max_width().unwrap_or(usize::MAX);
        let mut clipped = false;

        writeln!(self.output)?;
        for (i, line) in lines.iter().enumerate() {
            let (shown, shown_width) = line.unicode_truncate(max_width);
            clipped |= shown.len() < line.len();

            // Tile rows sit between the three header lines and the closing border
            let y = i as i32 - 3;
            if !self.color || y < 0 || y >= dungeon.height() {
                writeln!(self.output, "{}", shown)?;
                continue;
            }

            let prefix = format!("{:>2} |", y);
            let visible = shown_width.saturating_sub(prefix.len()).min(dungeon.width() as usize);
            queue!(self.output, style::Print(&prefix))?;
            for x in 0..visible as i32 {
                if let Some(tile) = dungeon.tile(Point::new(x, y)) {
                    queue!(self.output, style::PrintStyledContent(tile.styled()))?;
                }
            }
            if shown.len() == line.len() {
                queue!(self.output, style::Print("|"))?;
            }
            queue!(self.output, style::Print("\n"))?;
        }
        writeln!(self.output)?;
        self.output.flush()?;

        if clipped {
            self.say(
                &format!(
                    "Terminal is too narrow ({} columns) to show the whole map. Please resize the terminal.",
                    max_width
                ),
                Color::Yellow,
            )?;
        }
        Ok(())
    }
}

/// Parses `X Y` into a point.
fn parse_point(text: &str) -> Result<Point, AppError> {
    let coords = text
        .split_whitespace()
        .map(|s| s.parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| AppError::MalformedPoint(text.to_string()))?;

    match coords[..] {
        [x, y] => Ok(Point::new(x, y)),
        _ => Err(AppError::MalformedPoint(text.to_string())),
    }
}
