use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{write_element, Element};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("markup.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let table = Element::table().id("inventory").class("demo").child(
        Element::tbody().id("inventory-body").children([
            Element::tr()
                .child(Element::td().text("bolts"))
                .child(Element::td().text("120")),
            Element::tr()
                .child(Element::td().text("nuts"))
                .child(Element::td().text("80")),
        ]),
    );

    log::debug!("serializing {} rows", table.child_elements()[0].child_count());
    println!("{}", write_element(&table));
    Ok(())
}
