//! Route graph: flights grouped by departure airport.
//!
//! Built once from the catalog and read-only afterwards, so any number of
//! queries can share it. Airports are interned into a dense arena so per-query
//! scratch state (visited sets, label tables) is a plain `Vec` indexed by
//! airport position.

use std::collections::HashMap;

use crate::catalog::FlightCatalog;
use crate::domain::{AirportId, Flight, FlightId, Timestamp};

/// Position of an airport in the graph's arena.
pub(crate) type AirportIdx = usize;

/// Adjacency structure keyed by departure airport.
///
/// For each airport, departing flights are ordered by departure time, then
/// by arrival airport id, then by flight id. Traversal order and the
/// first-found route in every search follow this ordering.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Every airport seen as an origin or destination, ascending by id.
    airports: Vec<AirportId>,

    /// Map from airport id to its arena position.
    index: HashMap<AirportId, AirportIdx>,

    /// Departing flights per arena position, in graph order.
    departures: Vec<Vec<Flight>>,

    /// Map from flight id to (departure airport position, offset in its list).
    flights: HashMap<FlightId, (AirportIdx, usize)>,
}

impl RouteGraph {
    /// Build a graph from validated flights.
    ///
    /// Flight ids are expected to be unique; if they are not, `flight()`
    /// resolves to whichever copy sorts last.
    pub fn new(flights: impl IntoIterator<Item = Flight>) -> Self {
        let flights: Vec<Flight> = flights.into_iter().collect();

        let mut airports: Vec<AirportId> = flights
            .iter()
            .flat_map(|f| [f.departure_airport, f.arrival_airport])
            .collect();
        airports.sort_unstable();
        airports.dedup();

        let index: HashMap<AirportId, AirportIdx> = airports
            .iter()
            .enumerate()
            .map(|(idx, airport)| (*airport, idx))
            .collect();

        let mut departures: Vec<Vec<Flight>> = vec![Vec::new(); airports.len()];
        for flight in flights {
            // Every departure airport was interned above.
            if let Some(&idx) = index.get(&flight.departure_airport) {
                departures[idx].push(flight);
            }
        }

        let mut by_id = HashMap::new();
        for (idx, list) in departures.iter_mut().enumerate() {
            list.sort_by_key(|f| (f.departure, f.arrival_airport, f.id));
            for (offset, flight) in list.iter().enumerate() {
                by_id.insert(flight.id, (idx, offset));
            }
        }

        Self {
            airports,
            index,
            departures,
            flights: by_id,
        }
    }

    /// Build a graph from an ingested catalog.
    pub fn from_catalog(catalog: &FlightCatalog) -> Self {
        Self::new(catalog.flights().iter().cloned())
    }

    /// All known airports, ascending by id.
    pub fn airports(&self) -> &[AirportId] {
        &self.airports
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    /// Returns true if any flight departs from or arrives at `airport`.
    pub fn contains(&self, airport: AirportId) -> bool {
        self.index.contains_key(&airport)
    }

    /// Flights departing `airport`, in graph order.
    ///
    /// Unknown airports have no departures.
    pub fn flights_from(&self, airport: AirportId) -> &[Flight] {
        self.index_of(airport)
            .map(|idx| self.flights_at(idx))
            .unwrap_or(&[])
    }

    /// Flights departing `airport` at or after `time`, in graph order.
    pub fn departures_after(&self, airport: AirportId, time: Timestamp) -> &[Flight] {
        self.index_of(airport)
            .map(|idx| self.departures_at_after(idx, time))
            .unwrap_or(&[])
    }

    /// Look up a flight by id.
    pub fn flight(&self, id: FlightId) -> Option<&Flight> {
        let &(idx, offset) = self.flights.get(&id)?;
        self.departures.get(idx)?.get(offset)
    }

    pub(crate) fn index_of(&self, airport: AirportId) -> Option<AirportIdx> {
        self.index.get(&airport).copied()
    }

    pub(crate) fn airport_at(&self, idx: AirportIdx) -> AirportId {
        self.airports[idx]
    }

    pub(crate) fn flights_at(&self, idx: AirportIdx) -> &[Flight] {
        &self.departures[idx]
    }

    /// Suffix of the departure list with departure >= `time`.
    ///
    /// Lists are sorted by departure first, so a binary search finds it.
    pub(crate) fn departures_at_after(&self, idx: AirportIdx, time: Timestamp) -> &[Flight] {
        let list = &self.departures[idx];
        let start = list.partition_point(|f| f.departure < time);
        &list[start..]
    }
}

impl From<&FlightCatalog> for RouteGraph {
    fn from(catalog: &FlightCatalog) -> Self {
        Self::from_catalog(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::fixtures::{at, flight};

    #[test]
    fn groups_by_departure_airport() {
        let graph = RouteGraph::new(vec![
            flight(1, 10, 20, "08:00", "09:00", 100),
            flight(2, 20, 30, "10:00", "11:00", 100),
            flight(3, 10, 30, "07:00", "09:30", 100),
        ]);

        let ids: Vec<_> = graph.flights_from(AirportId(10)).iter().map(|f| f.id.0).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(graph.flights_from(AirportId(20)).len(), 1);
        assert!(graph.flights_from(AirportId(30)).is_empty());
    }

    #[test]
    fn arrival_only_airports_are_known() {
        let graph = RouteGraph::new(vec![flight(1, 10, 20, "08:00", "09:00", 100)]);

        assert_eq!(graph.airports(), &[AirportId(10), AirportId(20)]);
        assert!(graph.contains(AirportId(20)));
        assert!(!graph.contains(AirportId(30)));
    }

    #[test]
    fn same_departure_orders_by_arrival_airport() {
        let graph = RouteGraph::new(vec![
            flight(1, 10, 40, "08:00", "09:00", 100),
            flight(2, 10, 20, "08:00", "09:00", 100),
            flight(3, 10, 30, "08:00", "09:00", 100),
            flight(4, 10, 50, "07:59", "09:00", 100),
        ]);

        let arrivals: Vec<_> = graph
            .flights_from(AirportId(10))
            .iter()
            .map(|f| f.arrival_airport.0)
            .collect();
        assert_eq!(arrivals, vec![50, 20, 30, 40]);
    }

    #[test]
    fn full_ties_order_by_flight_id() {
        let graph = RouteGraph::new(vec![
            flight(9, 10, 20, "08:00", "09:00", 100),
            flight(3, 10, 20, "08:00", "09:30", 100),
        ]);

        let ids: Vec<_> = graph.flights_from(AirportId(10)).iter().map(|f| f.id.0).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[test]
    fn departures_after_is_inclusive() {
        let graph = RouteGraph::new(vec![
            flight(1, 10, 20, "08:00", "09:00", 100),
            flight(2, 10, 20, "09:00", "10:00", 100),
            flight(3, 10, 20, "10:00", "11:00", 100),
        ]);

        let ids: Vec<_> = graph
            .departures_after(AirportId(10), at("09:00"))
            .iter()
            .map(|f| f.id.0)
            .collect();
        assert_eq!(ids, vec![2, 3]);

        assert!(graph.departures_after(AirportId(10), at("10:01")).is_empty());
        assert_eq!(graph.departures_after(AirportId(10), at("00:00")).len(), 3);
        assert!(graph.departures_after(AirportId(99), at("00:00")).is_empty());
    }

    #[test]
    fn flight_lookup() {
        let graph = RouteGraph::new(vec![
            flight(1, 10, 20, "08:00", "09:00", 100),
            flight(2, 20, 30, "10:00", "11:00", 250),
        ]);

        assert_eq!(graph.flight(FlightId(2)).unwrap().fare, 250);
        assert!(graph.flight(FlightId(3)).is_none());
        assert_eq!(graph.flight_count(), 2);
        assert_eq!(graph.airport_count(), 3);
    }

    #[test]
    fn empty_graph() {
        let graph = RouteGraph::new(Vec::new());
        assert_eq!(graph.airport_count(), 0);
        assert!(graph.flights_from(AirportId(1)).is_empty());
    }

    #[test]
    fn from_catalog() {
        let catalog = FlightCatalog::new(vec![flight(1, 10, 20, "08:00", "09:00", 100)]);
        let graph = RouteGraph::from(&catalog);
        assert_eq!(graph.flight_count(), 1);
    }
}
