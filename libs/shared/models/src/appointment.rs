use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A booked slot as it lives in the store and on the wire.
///
/// Dates serialize as `YYYY-MM-DD`, times as `HH:MM`; both are kept as
/// structured chrono values internally so ordering is chronological, not
/// lexicographic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(with = "wall_clock")]
    pub time: NaiveTime,
    pub specialist: String,
    pub service: String,
    #[serde(rename = "strizhkaType", default)]
    pub strizhka_type: String,
    pub name: String,
    pub phone: String,
}

/// Payload for an appointment that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub specialist: String,
    pub service: String,
    pub strizhka_type: String,
    pub name: String,
    pub phone: String,
}

impl NewAppointment {
    pub fn into_appointment(self, id: i64) -> Appointment {
        Appointment {
            id,
            date: self.date,
            time: self.time,
            specialist: self.specialist,
            service: self.service,
            strizhka_type: self.strizhka_type,
            name: self.name,
            phone: self.phone,
        }
    }
}

/// Serde adapter for the `HH:MM` wall-clock wire form.
pub mod wall_clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Appointment {
        Appointment {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            specialist: "Ivan".to_string(),
            service: "Haircut".to_string(),
            strizhka_type: String::new(),
            name: "Peter".to_string(),
            phone: "+7 000 000-00-00".to_string(),
        }
    }

    #[test]
    fn serializes_wire_formats() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["date"], json!("2025-01-15"));
        assert_eq!(value["time"], json!("09:00"));
        assert_eq!(value["strizhkaType"], json!(""));
    }

    #[test]
    fn deserializes_wire_formats() {
        let appointment: Appointment = serde_json::from_value(json!({
            "id": 3,
            "date": "2025-01-15",
            "time": "13:00",
            "specialist": "Ivan",
            "service": "Shave",
            "name": "Anna",
            "phone": "+7 111 222-33-44"
        }))
        .unwrap();
        assert_eq!(appointment.time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
        assert_eq!(appointment.strizhka_type, "");
    }
}
