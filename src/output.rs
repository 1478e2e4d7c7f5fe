use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::logging::LogSink;
use crate::product::Product;
use crate::{info_log, Result};

const HEADER: [&str; 3] = ["title", "price", "rating"];

/// Writes the header row followed by one row per product.
/// The header is written even when there are no products.
pub fn write_products<W: Write>(writer: W, products: &[Product]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for product in products {
        wtr.serialize(product)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads rows written by [`write_products`] back into products.
pub fn read_products<R: Read>(reader: R) -> Result<Vec<Product>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let products = rdr.deserialize().collect::<std::result::Result<Vec<Product>, _>>()?;
    Ok(products)
}

/// Creates (or truncates) `path` and writes the products to it.
pub fn save_to_csv<L: LogSink>(path: &Path, products: &[Product], log: &L) -> Result<()> {
    let file = File::create(path)?;
    write_products(file, products)?;
    info_log!(log, "Data saved to {}", path.display());
    Ok(())
}
