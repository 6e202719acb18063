//! Sunrise, solar noon and sunset across diverse global locations, in each city's own time zone.

use chrono::NaiveTime;
use chrono_tz::Tz;
use solar_transit::{ChronoClock, CivilDate, SolarCalculator, SunriseResult, dms_to_degrees};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    timezone: Tz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Hannover, Germany",
            latitude: dms_to_degrees(52.0, 23, 12.0),
            longitude: dms_to_degrees(9.0, 41, 52.0),
            timezone: chrono_tz::Europe::Berlin,
        },
        City {
            name: "Boa Vista, Cabo Verde",
            latitude: 16.141,
            longitude: -22.904,
            timezone: chrono_tz::Atlantic::Cape_Verde,
        },
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            timezone: chrono_tz::Arctic::Longyearbyen,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
            timezone: chrono_tz::America::Anchorage,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            timezone: chrono_tz::Asia::Singapore,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            timezone: chrono_tz::Pacific::Auckland,
        },
    ];

    let dates = [
        ("June Solstice", CivilDate::new(2023, 6, 21)?),
        ("December Solstice", CivilDate::new(2023, 12, 21)?),
    ];

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.2}°N, {:.2}°E ({})",
            city.latitude, city.longitude, city.timezone
        );

        let calculator = SolarCalculator::at_sea_level(city.latitude, city.longitude);
        let clock = ChronoClock::new(city.timezone);
        for (label, date) in &dates {
            match calculator.solar_day(*date, &clock) {
                Some(result) => print_sunrise_result(&format!("{label} ({date})"), &result),
                None => println!("{label} ({date}): not representable in {}", city.timezone),
            }
        }
        println!();
    }

    Ok(())
}

fn print_sunrise_result(label: &str, result: &SunriseResult<NaiveTime>) {
    println!("{label}:");
    match result {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => {
            println!("  Sunrise: {}", sunrise.format("%H:%M:%S"));
            println!("  Noon:    {}", transit.format("%H:%M:%S"));
            println!("  Sunset:  {}", sunset.format("%H:%M:%S"));
        }
        SunriseResult::AllDay { transit } => {
            println!("  Midnight sun, the sun does not set");
            println!("  Noon:    {}", transit.format("%H:%M:%S"));
        }
        SunriseResult::AllNight { transit } => {
            println!("  Polar night, the sun does not rise");
            println!("  Noon:    {}", transit.format("%H:%M:%S"));
        }
    }
}
