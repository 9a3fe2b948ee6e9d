use crate::de;
use crate::month::Month;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Price range labels in the order the bar chart draws them
pub const PRICE_RANGES: [&str; 10] = [
    "0-100",
    "101-200",
    "201-300",
    "301-400",
    "401-500",
    "501-600",
    "601-700",
    "701-800",
    "801-900",
    "901-above",
];

/// A sale/listing record as returned by the transactions service.
///
/// Displayed verbatim: `id` and `price` keep whatever text the service sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "de::text")]
    pub id: String,
    #[serde(default, deserialize_with = "de::text")]
    pub title: String,
    #[serde(default, deserialize_with = "de::text")]
    pub description: String,
    #[serde(default, deserialize_with = "de::text")]
    pub price: String,
    #[serde(default, deserialize_with = "de::text")]
    pub category: String,
    #[serde(default, deserialize_with = "de::flag")]
    pub sold: bool,
    /// Image URL, rendered as a thumbnail
    #[serde(default, deserialize_with = "de::text")]
    pub image: String,
}

/// Monthly sales aggregate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default, deserialize_with = "de::number")]
    pub total_sale: f64,
    #[serde(default, deserialize_with = "de::count")]
    pub total_sold_items: u64,
    #[serde(default, deserialize_with = "de::count")]
    pub total_not_sold_items: u64,
}

/// One bar of the price distribution chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBucket {
    pub price_range: String,
    pub count: u64,
}

impl PriceBucket {
    /// All ten ranges with a zero count
    pub fn empty_set() -> Vec<PriceBucket> {
        PRICE_RANGES
            .iter()
            .map(|label| PriceBucket {
                price_range: (*label).to_string(),
                count: 0,
            })
            .collect()
    }
}

/// Per-month record from the chart service.
///
/// The price ranges are top-level keys next to `month`
/// (`{"month": "March", "0-100": 4, …}`), so everything except `month` is
/// kept in `ranges` and projected on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMonthRecord {
    pub month: String,
    #[serde(flatten)]
    pub ranges: Map<String, Value>,
}

impl ChartMonthRecord {
    /// Project into the ten fixed buckets. Ranges the record lacks, or holds
    /// as something other than a count, project to zero; extra keys are
    /// ignored.
    pub fn buckets(&self) -> Vec<PriceBucket> {
        PRICE_RANGES
            .iter()
            .map(|label| PriceBucket {
                price_range: (*label).to_string(),
                count: self
                    .ranges
                    .get(*label)
                    .and_then(de::count_value)
                    .unwrap_or(0),
            })
            .collect()
    }
}

/// Buckets of the first record whose `month` equals `month`, or `None` when
/// the response has no record for it.
pub fn select_month_buckets(records: &[ChartMonthRecord], month: Month) -> Option<Vec<PriceBucket>> {
    records
        .iter()
        .find(|record| record.month == month.name())
        .map(ChartMonthRecord::buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_deserializes_mixed_field_types() {
        let transactions: Vec<Transaction> = serde_json::from_value(json!([
            {
                "id": 1,
                "title": "Mountain bike",
                "description": "21 speed, barely used",
                "price": 329.85,
                "category": "sports",
                "sold": true,
                "image": "https://img.example/bike.jpg",
                "dateOfSale": "2022-03-27T20:29:54+05:30"
            },
            {
                "id": "2",
                "title": "Lamp",
                "price": "12",
                "sold": "false"
            }
        ]))
        .unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, "1");
        assert_eq!(transactions[0].price, "329.85");
        assert!(transactions[0].sold);
        assert_eq!(transactions[0].image, "https://img.example/bike.jpg");

        assert_eq!(transactions[1].id, "2");
        assert_eq!(transactions[1].price, "12");
        assert!(!transactions[1].sold);
        assert_eq!(transactions[1].description, "");
        assert_eq!(transactions[1].category, "");
    }

    #[test]
    fn test_transaction_list_tolerates_missing_id_and_odd_sold() {
        let transactions: Vec<Transaction> = serde_json::from_value(json!([
            { "id": "1", "title": "Kettle", "sold": 1 },
            { "title": "no id" },
            { "id": 3, "sold": 0 },
            { "id": 4, "sold": "yes" },
            { "id": 5, "sold": [true] }
        ]))
        .unwrap();

        assert_eq!(transactions.len(), 5);
        assert!(transactions[0].sold);
        assert_eq!(transactions[1].id, "");
        assert_eq!(transactions[1].title, "no id");
        assert!(!transactions[1].sold);
        assert!(!transactions[2].sold);
        assert!(!transactions[3].sold);
        assert!(!transactions[4].sold);
    }

    #[test]
    fn test_statistics_uses_camel_case_fields() {
        let stats: Vec<Statistics> = serde_json::from_value(json!([
            { "totalSale": 1520.5, "totalSoldItems": 7, "totalNotSoldItems": "3", "month": "March" }
        ]))
        .unwrap();

        assert_eq!(
            stats[0],
            Statistics {
                total_sale: 1520.5,
                total_sold_items: 7,
                total_not_sold_items: 3,
            }
        );
    }

    #[test]
    fn test_statistics_missing_totals_default_to_zero() {
        let stats: Vec<Statistics> = serde_json::from_value(json!([
            { "totalSale": 10, "totalSoldItems": 2 }
        ]))
        .unwrap();
        assert_eq!(
            stats[0],
            Statistics {
                total_sale: 10.0,
                total_sold_items: 2,
                total_not_sold_items: 0,
            }
        );

        let empty: Statistics = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, Statistics::default());
    }

    #[test]
    fn test_statistics_rejects_non_numeric_totals() {
        let result = serde_json::from_value::<Statistics>(json!({
            "totalSale": "lots",
            "totalSoldItems": 1,
            "totalNotSoldItems": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_chart_record_projects_fixed_order() {
        let record: ChartMonthRecord = serde_json::from_value(json!({
            "id": "4",
            "month": "March",
            "901-above": 1,
            "0-100": 5,
            "301-400": "2",
            "101-200": 3
        }))
        .unwrap();

        let buckets = record.buckets();
        assert_eq!(buckets.len(), 10);

        let labels: Vec<&str> = buckets.iter().map(|b| b.price_range.as_str()).collect();
        assert_eq!(labels, PRICE_RANGES.to_vec());

        let counts: Vec<u64> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![5, 3, 0, 2, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_select_month_buckets_matches_month_name() {
        let records: Vec<ChartMonthRecord> = serde_json::from_value(json!([
            { "month": "February", "0-100": 9 },
            { "month": "March", "0-100": 4, "501-600": 2 }
        ]))
        .unwrap();

        let buckets = select_month_buckets(&records, Month::MARCH).unwrap();
        assert_eq!(buckets[0].count, 4);
        assert_eq!(buckets[5].count, 2);

        assert!(select_month_buckets(&records, Month::JUNE).is_none());
        assert!(select_month_buckets(&[], Month::MARCH).is_none());
    }

    #[test]
    fn test_empty_bucket_set() {
        let buckets = PriceBucket::empty_set();
        assert_eq!(buckets.len(), PRICE_RANGES.len());
        assert!(buckets.iter().all(|b| b.count == 0));
        assert_eq!(buckets[9].price_range, "901-above");
    }
}
