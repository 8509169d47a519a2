//! The bus fleet and popular routes.
//!
//! There is no inventory backend: every search is answered from the same
//! fixed list of buses, whatever the origin, destination or date. This
//! module provides lookup over that list.

use std::collections::HashMap;

use crate::domain::{BerthClass, Bus, BusId, BusType, Climate, ClockTime, Rupees};

/// The buses available for booking.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    /// Buses in listing order.
    buses: Vec<Bus>,

    /// Map from bus id to index in `buses`.
    index: HashMap<BusId, usize>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bus to the end of the listing.
    ///
    /// A bus with an id already in the fleet replaces the earlier entry in
    /// place.
    pub fn add(&mut self, bus: Bus) {
        match self.index.get(&bus.id) {
            Some(&i) => self.buses[i] = bus,
            None => {
                self.index.insert(bus.id.clone(), self.buses.len());
                self.buses.push(bus);
            }
        }
    }

    /// Look up a bus by id.
    pub fn get(&self, id: &BusId) -> Option<&Bus> {
        self.index.get(id).map(|&i| &self.buses[i])
    }

    /// All buses in listing order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn len(&self) -> usize {
        self.buses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }
}

/// A route advertised on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularRoute {
    pub from: &'static str,
    pub to: &'static str,
    /// Lowest fare on the route.
    pub price: Rupees,
    /// Typical travel time, e.g. "3h 30m".
    pub time: &'static str,
}

/// Routes shown under the search form.
pub fn popular_routes() -> Vec<PopularRoute> {
    [
        ("Mumbai", "Pune", 350, "3h 30m"),
        ("Delhi", "Jaipur", 550, "5h 15m"),
        ("Bangalore", "Chennai", 650, "6h 45m"),
        ("Hyderabad", "Vijayawada", 450, "4h 30m"),
        ("Kolkata", "Siliguri", 750, "8h 00m"),
        ("Ahmedabad", "Surat", 300, "3h 00m"),
    ]
    .into_iter()
    .map(|(from, to, price, time)| PopularRoute {
        from,
        to,
        price: Rupees(price),
        time,
    })
    .collect()
}

/// The demonstration fleet: six buses spread across the day.
pub fn demo_fleet() -> Fleet {
    const AC_SLEEPER: BusType = BusType::new(Climate::Ac, BerthClass::Sleeper);
    const AC_SEATER: BusType = BusType::new(Climate::Ac, BerthClass::Seater);
    const NON_AC_SLEEPER: BusType = BusType::new(Climate::NonAc, BerthClass::Sleeper);
    const NON_AC_SEATER: BusType = BusType::new(Climate::NonAc, BerthClass::Seater);

    #[allow(clippy::type_complexity)]
    let rows: [(&str, &str, BusType, (u8, u8), (u8, u8), u32, u32, u32, f32, &[&str]); 6] = [
        (
            "bus1",
            "Express Travels",
            AC_SLEEPER,
            (7, 30),
            (11, 30),
            240,
            650,
            23,
            4.5,
            &["WiFi", "USB Charging", "Blanket", "Water Bottle"],
        ),
        (
            "bus2",
            "Royal Coaches",
            NON_AC_SEATER,
            (8, 45),
            (13, 15),
            270,
            350,
            15,
            3.8,
            &["Water Bottle"],
        ),
        (
            "bus3",
            "City Link",
            AC_SEATER,
            (10, 0),
            (14, 0),
            240,
            450,
            32,
            4.2,
            &["WiFi", "USB Charging", "Water Bottle"],
        ),
        (
            "bus4",
            "Luxury Lines",
            AC_SLEEPER,
            (13, 30),
            (18, 0),
            270,
            750,
            8,
            4.7,
            &["WiFi", "USB Charging", "Blanket", "Water Bottle", "Snacks"],
        ),
        (
            "bus5",
            "Highway Express",
            NON_AC_SLEEPER,
            (16, 15),
            (20, 45),
            270,
            400,
            19,
            3.5,
            &["Water Bottle"],
        ),
        (
            "bus6",
            "Night Rider",
            AC_SLEEPER,
            (22, 0),
            (2, 30),
            270,
            600,
            27,
            4.3,
            &["WiFi", "USB Charging", "Blanket", "Water Bottle"],
        ),
    ];

    let mut fleet = Fleet::new();
    for (id, operator, bus_type, dep, arr, duration_mins, price, seats, rating, amenities) in rows
    {
        let (Ok(id), Ok(departure), Ok(arrival)) = (
            BusId::parse(id),
            ClockTime::new(dep.0, dep.1),
            ClockTime::new(arr.0, arr.1),
        ) else {
            continue;
        };
        fleet.add(Bus {
            id,
            operator: operator.to_string(),
            bus_type,
            departure,
            arrival,
            duration_mins,
            price: Rupees(price),
            seats_available: seats,
            rating,
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
        });
    }
    fleet
}
