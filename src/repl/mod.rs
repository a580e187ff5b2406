pub mod command;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::adapters::http::PokeApiEndpoints;
use crate::domain::location::LocationArea;
use crate::domain::pagination::PaginationCursor;
use crate::domain::pokedex::{CATCH_CEILING, CatchOutcome, CatchRoll, Pokedex, attempt_catch};
use crate::domain::pokemon::Pokemon;
use crate::error::{PokedexError, Result};
use crate::ports::fetcher::Fetcher;

pub use command::{COMMANDS, Command};

pub const PROMPT: &str = "Pokedex > ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// State owned by the command loop and lent to each command.
pub struct Session {
    fetcher: Box<dyn Fetcher>,
    endpoints: PokeApiEndpoints,
    locations: PaginationCursor,
    pokedex: Pokedex,
    roll: Box<dyn CatchRoll + Send>,
}

impl Session {
    pub fn new(
        fetcher: Box<dyn Fetcher>,
        endpoints: PokeApiEndpoints,
        roll: Box<dyn CatchRoll + Send>,
    ) -> Result<Self> {
        let locations = PaginationCursor::new(endpoints.first_location_page()?);
        Ok(Self {
            fetcher,
            endpoints,
            locations,
            pokedex: Pokedex::new(),
            roll,
        })
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        debug!(?command, "Executing command");
        match command {
            Command::Help => print_help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                let names = self.locations.advance(self.fetcher.as_ref()).await?;
                print_locations(out, &names)?;
            }
            Command::MapBack => {
                let names = self.locations.retreat(self.fetcher.as_ref()).await?;
                print_locations(out, &names)?;
            }
            Command::Explore(name) => self.explore(&name, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => {
                let entry = self
                    .pokedex
                    .get(&name)
                    .ok_or(PokedexError::NotCaught(name))?;
                write!(out, "{}", entry.pokemon.summary())?;
                writeln!(
                    out,
                    "Caught: {}",
                    entry.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
                )?;
            }
            Command::Pokedex => {
                writeln!(out, "Your Pokedex:")?;
                for name in self.pokedex.names() {
                    writeln!(out, " - {name}")?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    async fn explore<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let url = self.endpoints.location_area(name)?;
        let body = self.fetcher.fetch(&url).await?;
        let area = LocationArea::decode(&body)?;

        writeln!(out, "Exploring {}...", area.name)?;
        writeln!(out, "Found Pokemon:")?;
        for pokemon in area.pokemon_names() {
            writeln!(out, " - {pokemon}")?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let url = self.endpoints.pokemon(name)?;
        let body = self.fetcher.fetch(&url).await?;
        let pokemon = Pokemon::decode(&body)?;

        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;
        let roll = self.roll.roll(CATCH_CEILING);
        let outcome = attempt_catch(pokemon.base_experience, roll);
        debug!(
            pokemon = %pokemon.name,
            roll,
            base_experience = ?pokemon.base_experience,
            ?outcome,
            "Catch attempt"
        );
        match outcome {
            CatchOutcome::Caught => {
                writeln!(out, "{} was caught!", pokemon.name)?;
                writeln!(out, "You may now inspect it with the inspect command.")?;
                self.pokedex.record(pokemon);
            }
            CatchOutcome::NearMiss => writeln!(out, "Argh! {} almost had it!", pokemon.name)?,
            CatchOutcome::BrokeFree => writeln!(out, "{} escaped!", pokemon.name)?,
        }
        Ok(())
    }
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for info in COMMANDS {
        writeln!(out, "{}: {}", info.usage, info.description)?;
    }
    Ok(())
}

fn print_locations<W: Write>(out: &mut W, names: &[String]) -> Result<()> {
    writeln!(out, "Locations:")?;
    for name in names {
        writeln!(out, " - {name}")?;
    }
    Ok(())
}

/// Read commands line by line until `exit` or end of input.
///
/// Every error is reported as one line on `err` and the loop carries on.
pub async fn run<R, W, E>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    E: Write,
{
    let mut buf = Vec::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            writeln!(out)?;
            break;
        }
        // Undecodable bytes become U+FFFD and flow into the normal error path
        let line = String::from_utf8_lossy(&buf);

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(err, "{e}")?;
                continue;
            }
        };

        match session.execute(command, out).await {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => writeln!(err, "{e}")?,
        }
    }
    Ok(())
}
