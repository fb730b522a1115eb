use haul::solver::{run, Args, Parser};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())
}
