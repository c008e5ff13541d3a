use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{write_element, Element, Event};
use tabrender::{Renderer, TableConfig, TableData};

const FIXTURE: &str = r#"{
    "thead": [["Part", "Qty", "Price"]],
    "tbody": [
        ["bolts", 120, 0.12],
        ["nuts", 80, 0.08],
        ["pins", 700, 0.02]
    ],
    "tfoot": [["total", 900, null]]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("clicks.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let data = TableData::from_json(FIXTURE)?;
    let mut root = Element::div().id("app");
    let mut renderer = Renderer::new(TableConfig::default().table_id("parts"));

    renderer.render(&mut root, "app", &data);
    println!("fresh render:\n{}\n", write_element(&root));

    // click the quantity header twice: ascending, then descending
    let qty = renderer.sorter().bound()[1].clone();
    renderer.handle(&mut root, &Event::click(&qty));
    println!("after first click on Qty:\n{}\n", write_element(&root));

    renderer.handle(&mut root, &Event::click(&qty));
    println!("after second click on Qty:\n{}", write_element(&root));

    Ok(())
}
