use callejero::{resolve_addresses, AddressRecord, Coordinate, Error, ReferencePoint};
use csv::Reader;
use log::error;
use std::env;
use std::fs::File;
use std::process;

/// Parse an integer-ish CSV field. Blank, non-numeric and non-positive
/// values all mean "absent" — bad input is insufficient information, not a
/// reason to abort the run.
fn parse_positive_number(field: Option<&str>) -> Option<u32> {
    field
        .and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|number| *number > 0)
        .and_then(|number| u32::try_from(number).ok())
}

fn parse_zone(field: Option<&str>) -> Option<u16> {
    field
        .and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|zone| *zone > 0)
        .and_then(|zone| u16::try_from(zone).ok())
}

fn parse_optional_text(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn column_position(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header == name)
}

/// Load reference points from a CSV with `street`, `house_number`, `lat` and
/// `lng` columns. Rows with unparseable coordinates load as coordinate-less
/// points and are skipped at indexing.
fn load_reference_points(path: &str) -> Result<Vec<ReferencePoint>, Error> {
    let mut reader = Reader::from_reader(File::open(path)?);
    let headers = reader.headers()?.clone();

    let street_pos = column_position(&headers, "street")
        .ok_or_else(|| Error::ParserError("Missing 'street' column".to_string()))?;
    let number_pos = column_position(&headers, "house_number");
    let lat_pos = column_position(&headers, "lat")
        .ok_or_else(|| Error::ParserError("Missing 'lat' column".to_string()))?;
    let lng_pos = column_position(&headers, "lng")
        .ok_or_else(|| Error::ParserError("Missing 'lng' column".to_string()))?;

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;

        let street = record.get(street_pos).unwrap_or("").trim().to_string();
        let house_number = parse_positive_number(number_pos.and_then(|pos| record.get(pos)));

        let lat = record.get(lat_pos).and_then(|v| v.trim().parse::<f64>().ok());
        let lng = record.get(lng_pos).and_then(|v| v.trim().parse::<f64>().ok());
        let coordinate = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        };

        points.push(ReferencePoint {
            street,
            house_number,
            coordinate,
        });
    }

    Ok(points)
}

/// Load address records from a CSV with a `street` column and optional
/// `house_number`, `cross_street_1`, `cross_street_2` and `zone` columns.
fn load_records(path: &str) -> Result<Vec<AddressRecord>, Error> {
    let mut reader = Reader::from_reader(File::open(path)?);
    let headers = reader.headers()?.clone();

    let street_pos = column_position(&headers, "street")
        .ok_or_else(|| Error::ParserError("Missing 'street' column".to_string()))?;
    let number_pos = column_position(&headers, "house_number");
    let cross_1_pos = column_position(&headers, "cross_street_1");
    let cross_2_pos = column_position(&headers, "cross_street_2");
    let zone_pos = column_position(&headers, "zone");

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |pos: Option<usize>| pos.and_then(|pos| record.get(pos));

        records.push(AddressRecord {
            street: parse_optional_text(record.get(street_pos)),
            house_number: parse_positive_number(field(number_pos)),
            cross_street_1: parse_optional_text(field(cross_1_pos)),
            cross_street_2: parse_optional_text(field(cross_2_pos)),
            zone: parse_zone(field(zone_pos)),
            coordinate: None,
            method: None,
        });
    }

    Ok(records)
}

fn run(reference_path: &str, records_path: &str) -> Result<(), Error> {
    let reference_points = load_reference_points(reference_path)?;
    let mut records = load_records(records_path)?;

    let stats = resolve_addresses(&mut records, &reference_points)?;

    println!("Resolved {} of {} records", stats.total_resolved(), records.len());
    for (method, count) in stats.method_counts() {
        println!("  {:<16} {}", method.as_str(), count);
    }
    println!("  {:<16} {}", "unresolved", stats.unresolved_count());

    if !stats.top_unresolved_streets().is_empty() {
        println!("\nMost frequent unresolved street names:");
        for (street, count) in stats.top_unresolved_streets() {
            let display = if street.is_empty() { "(blank)" } else { street };
            println!("  [{:>5}] {}", count, display);
        }
    }

    Ok(())
}

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: callejero-cli <reference.csv> <records.csv>");
        process::exit(2);
    }

    if let Err(e) = run(&args[1], &args[2]) {
        error!("Failed to resolve addresses: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
