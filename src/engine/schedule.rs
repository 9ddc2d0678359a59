//! Weekly schedule - spreading training days over Monday..Sunday

use chrono::Weekday;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::exercises::CategoryRatios;
use crate::templates::workout as text;

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Strength,
    Cardio,
    Flexibility,
    Rest,
}

impl DayType {
    pub fn name(&self) -> &'static str {
        match self {
            DayType::Strength => "Strength training",
            DayType::Cardio => "Cardio",
            DayType::Flexibility => "Flexibility training",
            DayType::Rest => "Rest",
        }
    }

    /// Nominal session length in minutes before the age modifier
    fn base_minutes(&self) -> (f64, f64) {
        match self {
            DayType::Strength => (45.0, 60.0),
            DayType::Cardio => (30.0, 45.0),
            DayType::Flexibility => (20.0, 30.0),
            DayType::Rest => (0.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(rename = "type")]
    pub day_type: DayType,
    pub duration: String,
    pub description: String,
}

impl DayPlan {
    pub fn rest() -> Self {
        Self {
            day_type: DayType::Rest,
            duration: "0 minutes".to_string(),
            description: text::REST_DAY.to_string(),
        }
    }

    pub fn training(day_type: DayType, intensity: &str, duration_multiplier: f64) -> Self {
        let description = match day_type {
            DayType::Strength => text::strength_day(intensity),
            DayType::Cardio => text::cardio_day(intensity),
            DayType::Flexibility => text::FLEXIBILITY_DAY.to_string(),
            DayType::Rest => return Self::rest(),
        };

        let (low, high) = day_type.base_minutes();
        Self {
            day_type,
            duration: format!(
                "{}-{} minutes",
                (low * duration_multiplier).round_ties_even(),
                (high * duration_multiplier).round_ties_even()
            ),
            description,
        }
    }
}

/// Training days per category. Flexibility is the residual and may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAllocation {
    pub strength: i32,
    pub cardio: i32,
    pub flexibility: i32,
}

impl DayAllocation {
    pub fn total(&self) -> i32 {
        self.strength + self.cardio + self.flexibility
    }
}

/// Split `days_per_week` by ratio, keeping at least one rest day
pub fn allocate_days(days_per_week: u8, ratios: &CategoryRatios) -> DayAllocation {
    let days = f64::from(days_per_week);
    let strength = (days * ratios.strength).round_ties_even() as i32;
    let cardio = (days * ratios.cardio).round_ties_even() as i32;
    let flexibility = i32::from(days_per_week) - strength - cardio;

    let mut allocation = DayAllocation { strength, cardio, flexibility };

    if allocation.total() >= 7 {
        if allocation.flexibility > 0 {
            allocation.flexibility -= 1;
        } else if allocation.cardio > allocation.strength {
            allocation.cardio -= 1;
        } else {
            allocation.strength -= 1;
        }
    }

    allocation
}

/// Seven days, Monday first
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySchedule {
    days: [DayPlan; 7],
}

impl WeeklySchedule {
    /// Strength days first, then cardio, then flexibility, rest for whatever is left
    pub fn build(allocation: &DayAllocation, intensity: &str, duration_multiplier: f64) -> Self {
        let blocks = [
            (DayType::Strength, allocation.strength),
            (DayType::Cardio, allocation.cardio),
            (DayType::Flexibility, allocation.flexibility),
        ];

        let mut assigned: Vec<DayPlan> = blocks
            .iter()
            .flat_map(|(day_type, count)| {
                std::iter::repeat_n(*day_type, (*count).max(0) as usize)
            })
            .take(WEEKDAYS.len())
            .map(|day_type| DayPlan::training(day_type, intensity, duration_multiplier))
            .collect();
        assigned.resize_with(WEEKDAYS.len(), DayPlan::rest);

        let days: [DayPlan; 7] = std::array::from_fn(|i| assigned[i].clone());
        Self { days }
    }

    pub fn day(&self, weekday: Weekday) -> &DayPlan {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayPlan)> {
        WEEKDAYS.iter().copied().zip(self.days.iter())
    }

    pub fn rest_days(&self) -> usize {
        self.days.iter().filter(|d| d.day_type == DayType::Rest).count()
    }
}

/// Serialized as `{"monday": {...}, ..., "sunday": {...}}`
impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (weekday, plan) in self.iter() {
            map.serialize_entry(weekday_key(weekday), plan)?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct NamedDays {
    monday: DayPlan,
    tuesday: DayPlan,
    wednesday: DayPlan,
    thursday: DayPlan,
    friday: DayPlan,
    saturday: DayPlan,
    sunday: DayPlan,
}

/// Reads back the weekday-keyed map; key order does not matter
impl<'de> Deserialize<'de> for WeeklySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let named = NamedDays::deserialize(deserializer)?;
        Ok(Self {
            days: [
                named.monday,
                named.tuesday,
                named.wednesday,
                named.thursday,
                named.friday,
                named.saturday,
                named.sunday,
            ],
        })
    }
}
