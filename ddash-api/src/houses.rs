use serde::{Deserialize, Serialize};

/// One listing from the `/houseprice` endpoint.
///
/// Amenity fields carry the literal strings "Yes"/"No"; use
/// [`crate::weather::is_yes`] wherever one feeds a computation.
/// `id` is never part of the API payload; the loader assigns it
/// sequentially after truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousePriceRow {
    pub price: f64,
    pub area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub stories: u32,
    pub mainroad: String,
    pub guestroom: String,
    pub basement: String,
    pub hotwaterheating: String,
    pub airconditioning: String,
    pub parking: String,
    pub prefarea: String,
    pub furnishingstatus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::HousePriceRow;

    #[test]
    fn test_house_row_parse_without_id() {
        let json = r#"{
            "price": 13300000, "area": 7420,
            "bedrooms": 4, "bathrooms": 2, "stories": 3,
            "mainroad": "Yes", "guestroom": "No", "basement": "No",
            "hotwaterheating": "No", "airconditioning": "Yes",
            "parking": "Yes", "prefarea": "Yes",
            "furnishingstatus": "furnished"
        }"#;
        let row: HousePriceRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.price, 13_300_000.0);
        assert_eq!(row.bedrooms, 4);
        assert_eq!(row.id, None);
    }

    #[test]
    fn test_api_provided_id_is_readable() {
        // ids in the payload parse, but the loader overwrites them anyway
        let json = r#"{
            "price": 100.0, "area": 10, "bedrooms": 1, "bathrooms": 1,
            "stories": 1, "mainroad": "No", "guestroom": "No",
            "basement": "No", "hotwaterheating": "No",
            "airconditioning": "No", "parking": "No", "prefarea": "No",
            "furnishingstatus": "unfurnished", "id": 99
        }"#;
        let row: HousePriceRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, Some(99));
    }
}
