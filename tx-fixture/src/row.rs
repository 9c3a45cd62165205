use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Every generated row deposits exactly `1.0`.
pub const DEPOSIT_MANTISSA: i64 = 10;
pub const DEPOSIT_SCALE: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RowType {
    Deposit,
}

/// How a row index is turned into a client id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClientScheme {
    /// `index mod 65536`, keeping client ids inside the 16-bit range.
    #[default]
    Modulo,
    /// Reproduces the historical fixture, which evaluated `(index % 2) ^ 16`
    /// and so alternates between clients 16 and 17.
    Legacy,
}

impl ClientScheme {
    #[must_use]
    pub fn client_id(self, index: u32) -> u16 {
        match self {
            ClientScheme::Modulo => {
                let [lo, hi, _, _] = index.to_le_bytes();
                u16::from_le_bytes([lo, hi])
            }
            ClientScheme::Legacy => u16::from(index & 1 == 1) ^ 16,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Row {
    #[serde(rename = "type")]
    pub row_type: RowType,
    #[serde(rename = "client")]
    pub client_id: u16,
    #[serde(rename = "tx")]
    pub transaction_id: u32,
    pub amount: Decimal,
}

impl Row {
    pub const HEADER: [&'static str; 4] = ["type", "client", "tx", "amount"];

    #[must_use]
    pub fn deposit(index: u32, scheme: ClientScheme) -> Self {
        Row {
            row_type: RowType::Deposit,
            client_id: scheme.client_id(index),
            transaction_id: index,
            amount: Decimal::new(DEPOSIT_MANTISSA, DEPOSIT_SCALE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo_client_id() {
        let scheme = ClientScheme::Modulo;
        assert_eq!(scheme.client_id(0), 0);
        assert_eq!(scheme.client_id(1), 1);
        assert_eq!(scheme.client_id(65_535), 65_535);
        assert_eq!(scheme.client_id(65_536), 0);
        assert_eq!(scheme.client_id(2_999_999), (2_999_999 % 65_536) as u16);
    }

    #[test]
    fn test_legacy_client_id() {
        let scheme = ClientScheme::Legacy;
        assert_eq!(scheme.client_id(0), 16);
        assert_eq!(scheme.client_id(1), 17);
        assert_eq!(scheme.client_id(2), 16);
        assert_eq!(scheme.client_id(1001), 17);
    }

    #[test]
    fn test_deposit_row() {
        let row = Row::deposit(7, ClientScheme::default());
        assert_eq!(row.row_type, RowType::Deposit);
        assert_eq!(row.client_id, 7);
        assert_eq!(row.transaction_id, 7);
        assert_eq!(row.amount.to_string(), "1.0");
    }

    #[test]
    fn test_row_serializes_to_csv_line() {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        writer.serialize(Row::deposit(3, ClientScheme::Legacy)).unwrap();
        let bytes = writer.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "deposit,17,3,1.0\n");
    }

    #[test]
    fn test_row_deserializes() {
        let input = "type,client,tx,amount\ndeposit,1,1,1.0\n";
        let mut reader = csv::Reader::from_reader(input.as_bytes());
        let rows: Vec<Row> = reader.deserialize().map(Result::unwrap).collect();
        assert_eq!(rows, vec![Row::deposit(1, ClientScheme::Modulo)]);
    }
}
