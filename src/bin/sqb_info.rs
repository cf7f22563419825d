use sqb_rs::sqb::RawContainer;

use binread::BinReaderExt;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "sqb_info")]
struct Opt {
    #[structopt(parse(from_os_str))]
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();

    let mut file = BufReader::new(File::open(opt.input)?);

    let raw: RawContainer = file.read_le().map_err(sqb_rs::FormatError::from)?;
    let header = &raw.header;

    println!("format_flag: {:x}", header.format_flag);
    println!("sequence_count: {:x}, table_size: {:x}", header.sequence_count, header.table_size);
    if !header.table_size_matches() {
        println!("table size ({:x}) differs from 4 * sequence count ({:x})", header.table_size, 4 * u32::from(header.sequence_count));
    }
    println!("data base: 0x{:X}", raw.table.base);

    for (idx, (seq, (offset, pos))) in raw.table.entries.iter()
        .zip(raw.table.offsets.iter().zip(raw.table.positions()))
        .enumerate()
    {
        println!("{}: {} (offset: 0x{:X} @ 0x{:X}, flag: {:x}, entries: {})", idx, seq.id, offset, pos, seq.flag, seq.entries.len());
    }

    Ok(())
}
