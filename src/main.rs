use life::{GridError, LifeGrid};

const WIDTH: usize = 60;
const HEIGHT: usize = 40;
const GENERATIONS: u64 = 100;

fn main() -> Result<(), GridError> {
    env_logger::init();

    let mut grid = LifeGrid::new(WIDTH, HEIGHT)?;
    // A boat next to a glider heading for the bottom right corner.
    grid.place(
        3,
        3,
        "
        oo       o
        o o       o
         o      ooo",
    )?;
    while grid.generation() < GENERATIONS {
        grid.step();
    }
    log::info!(
        "population {} after {} generations",
        grid.population(),
        grid.generation()
    );
    println!("{grid}");
    Ok(())
}
