use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use simple_vending_engine::{
    csv::{InputRow, OutputRow, Row},
    machine::{inventory::Inventory, Machine},
};
use std::env::args;
use std::fs::File;
use std::io::BufReader;

fn run() -> Result<()> {
    let args: Vec<String> = args().collect();
    let input_filepath = args
        .get(1)
        .context(anyhow!("Missing scenario file as first positional argument."))?;

    info!("Reading scenario from {:?}", input_filepath);
    let input_reader = BufReader::new(File::open(input_filepath)?);
    let mut csv_reader = csv::Reader::from_reader(input_reader);

    // Stock rows seed the inventory; the machine is constructed once, at the
    // first event row, and later stock rows are rejected.
    let mut inventory = Inventory::default();
    let mut machine: Option<Machine> = None;
    for (index, result) in csv_reader.deserialize().into_iter().enumerate() {
        let input_row: InputRow = result?;
        let row: Row = match input_row.try_into() {
            Ok(row) => row,
            Err(error) => {
                warn!("Row {index} invalid: {error}");
                continue;
            }
        };
        match row {
            Row::Stock { product, count } => {
                if machine.is_some() {
                    warn!("Row {index} ignored: stock rows must precede events");
                    continue;
                }
                inventory.stock(product, count);
            }
            Row::Event(event) => {
                let machine = machine
                    .get_or_insert_with(|| Machine::new(std::mem::take(&mut inventory)));
                match machine.apply(event) {
                    Ok(Some(product)) => {
                        info!("Row {index} dispensed {}", product.name.0);
                    }
                    Ok(None) => {
                        debug!("Row {index} accepted, credit is {}", machine.credit());
                    }
                    Err(error) => warn!("Row {index} not applied: {error}"),
                }
            }
        }
    }

    // A scenario with no event rows still gets a report.
    let machine = machine.unwrap_or_else(|| Machine::new(inventory));
    info!(
        "Final state: {}, credit: {}",
        machine.state().name(),
        machine.credit()
    );

    let mut csv_writer = csv::Writer::from_writer(std::io::stdout());
    for entry in machine.inventory().iter() {
        csv_writer.serialize(OutputRow::from(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    match run() {
        Ok(()) => {}
        Err(error) => {
            error!("{}", error);
            std::process::exit(1)
        }
    }
}
