//! Conversion from catalog rows to domain flights.
//!
//! Rows are tokenized with the `csv` crate and validated column by column.
//! A bad row is reported and skipped; it never aborts the rest of the load.

use std::collections::HashSet;

use csv::{ErrorKind, StringRecord};
use tracing::warn;

use crate::domain::{AirportId, Flight, FlightDetails, FlightId, Market, Timestamp};

use super::error::{IngestError, RecordError};

/// Column positions in the catalog layout.
const COL_FLIGHT_ID: usize = 0;
const COL_DEPARTURE_DATE: usize = 1;
const COL_MARKET: usize = 2;
const COL_FLIGHT_NUMBER: usize = 3;
const COL_DEPARTURE_AIRPORT: usize = 4;
const COL_ARRIVAL_AIRPORT: usize = 5;
const COL_DEPARTURE_TIME: usize = 6;
const COL_ARRIVAL_TIME: usize = 7;
const COL_AIRCRAFT_ID: usize = 8;
const COL_AIRCRAFT_MODEL: usize = 9;
const COL_FARE: usize = 10;

/// Accepted flights and rejected rows, in source order.
pub(super) struct Parsed {
    pub flights: Vec<Flight>,
    pub rejected: Vec<IngestError>,
}

/// Read every data row from `reader`. The reader owns header handling.
///
/// Returns `Err` only for I/O failures; row-level problems land in
/// `Parsed::rejected`.
pub(super) fn read_rows<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
) -> Result<Parsed, csv::Error> {
    let mut flights = Vec::new();
    let mut rejected = Vec::new();
    let mut seen: HashSet<FlightId> = HashSet::new();
    let mut record = StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map_or(0, |p| p.line());
                let flight_id = record.get(COL_FLIGHT_ID).and_then(|s| s.parse().ok());

                let result = convert_record(&record).and_then(|flight| {
                    if seen.insert(flight.id) {
                        Ok(flight)
                    } else {
                        Err(RecordError::DuplicateFlight(flight.id))
                    }
                });

                match result {
                    Ok(flight) => flights.push(flight),
                    Err(kind) => {
                        let err = IngestError {
                            line,
                            flight: flight_id,
                            kind,
                        };
                        warn!(error = %err, "Skipping catalog row");
                        rejected.push(err);
                    }
                }
            }
            Err(e) => {
                if matches!(e.kind(), ErrorKind::Io(_)) {
                    return Err(e);
                }
                let line = e.position().map_or(0, |p| p.line());
                let err = IngestError {
                    line,
                    flight: None,
                    kind: RecordError::Malformed(e.to_string()),
                };
                warn!(error = %err, "Skipping catalog row");
                rejected.push(err);
            }
        }
    }

    Ok(Parsed { flights, rejected })
}

/// Convert a single catalog row to a flight.
pub fn convert_record(record: &StringRecord) -> Result<Flight, RecordError> {
    let id = FlightId(parse_u32(
        field(record, COL_FLIGHT_ID, "Flight ID")?,
        "Flight ID",
    )?);
    let departure_airport = AirportId(parse_u32(
        field(record, COL_DEPARTURE_AIRPORT, "Departure airport")?,
        "Departure airport",
    )?);
    let arrival_airport = AirportId(parse_u32(
        field(record, COL_ARRIVAL_AIRPORT, "Arrival airport")?,
        "Arrival airport",
    )?);
    let departure = parse_timestamp(
        field(record, COL_DEPARTURE_TIME, "Departure Time")?,
        "Departure Time",
    )?;
    let arrival = parse_timestamp(
        field(record, COL_ARRIVAL_TIME, "Arrival Time")?,
        "Arrival Time",
    )?;
    let fare = parse_fare(field(record, COL_FARE, "Air fares")?)?;

    let details = FlightDetails {
        departure_date: field(record, COL_DEPARTURE_DATE, "Departure date")?.to_string(),
        market: Market::parse(field(record, COL_MARKET, "Intl/Dome")?)?,
        flight_number: field(record, COL_FLIGHT_NUMBER, "Flight NO.")?.to_string(),
        aircraft_id: parse_u32(
            field(record, COL_AIRCRAFT_ID, "Airplane ID")?,
            "Airplane ID",
        )?,
        aircraft_model: field(record, COL_AIRCRAFT_MODEL, "Airplane Model")?.to_string(),
    };

    let flight = Flight::new(id, departure_airport, arrival_airport, departure, arrival, fare)?;
    Ok(flight.with_details(details))
}

fn field<'r>(
    record: &'r StringRecord,
    idx: usize,
    name: &'static str,
) -> Result<&'r str, RecordError> {
    match record.get(idx).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RecordError::MissingField(name)),
    }
}

fn parse_u32(value: &str, field: &'static str) -> Result<u32, RecordError> {
    value.parse().map_err(|_| RecordError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn parse_fare(value: &str) -> Result<u32, RecordError> {
    let invalid = || RecordError::InvalidInteger {
        field: "Air fares",
        value: value.to_string(),
    };
    let fare: i64 = value.parse().map_err(|_| invalid())?;
    if fare < 0 {
        return Err(RecordError::NegativeFare(fare));
    }
    u32::try_from(fare).map_err(|_| invalid())
}

fn parse_timestamp(value: &str, field: &'static str) -> Result<Timestamp, RecordError> {
    Timestamp::parse(value).map_err(|source| RecordError::InvalidTimestamp { field, source })
}
