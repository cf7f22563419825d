use sqb_rs::convert::{convert_file, Direction};

use std::error::Error;
use std::path::PathBuf;
use structopt::StructOpt;

/// sqb <----> yml
#[derive(Debug, StructOpt)]
#[structopt(name = "sqb")]
struct Opt {
    /// Either a .sqb or a .yml file
    #[structopt(parse(from_os_str))]
    input: PathBuf,
    /// Defaults to the input with its extension swapped
    #[structopt(parse(from_os_str), short = "o", long = "output")]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();

    match Direction::from_path(&opt.input)? {
        Direction::Decode => println!("dumping sqb..."),
        Direction::Encode => println!("creating sqb..."),
    }

    let written = convert_file(&opt.input, opt.output.as_deref())?;
    println!("wrote {}", written.display());
    println!("Complete");

    Ok(())
}
