//! Named entry points
//!
//! An `Invocation` is one call to a contract function with its flat string
//! arguments bound to names. Arguments stay as strings here: numeric, date
//! and list parsing belongs to the operation that consumes them.

use crate::errors::{ReechError, Result};

/// One call to a contract entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    RegisterFisher {
        id: String,
        name: String,
        govt_id: String,
    },
    GetFisher {
        id: String,
    },
    LogCatch {
        catch_id: String,
        fisher_id: String,
        species: String,
        weight_kg: String,
        date: String,
    },
    GetCatch {
        catch_id: String,
    },
    /// `catch_ids` is a JSON array of strings
    CreateBatch {
        batch_id: String,
        catch_ids: String,
        processor_id: String,
        date: String,
    },
    TrackBatch {
        batch_id: String,
    },
    PlaceOrder {
        order_id: String,
        batch_id: String,
        buyer_id: String,
        date: String,
    },
    GetOrder {
        order_id: String,
    },
    GenerateReport {
        start_date: String,
        end_date: String,
    },
    CreateAsset {
        id: String,
        color: String,
        size: String,
        owner: String,
        appraised_value: String,
    },
    ReadAsset {
        id: String,
    },
    UpdateAsset {
        id: String,
        color: String,
        size: String,
        appraised_value: String,
    },
    TransferAsset {
        id: String,
        new_owner: String,
    },
    DeleteAsset {
        id: String,
    },
    AssetExists {
        id: String,
    },
}

/// Every entry point name, in registration order
pub const FUNCTIONS: &[&str] = &[
    "RegisterFisher",
    "GetFisher",
    "LogCatch",
    "GetCatch",
    "CreateBatch",
    "TrackBatch",
    "PlaceOrder",
    "GetOrder",
    "GenerateReport",
    "CreateAsset",
    "ReadAsset",
    "UpdateAsset",
    "TransferAsset",
    "DeleteAsset",
    "AssetExists",
];

fn take<const N: usize>(function: &str, args: &[String]) -> Result<[String; N]> {
    <[String; N]>::try_from(args.to_vec()).map_err(|_| {
        ReechError::validation(
            "args",
            format!("{} takes {} argument(s), got {}", function, N, args.len()),
        )
    })
}

impl Invocation {
    /// Bind a function name and its positional arguments
    ///
    /// # Errors
    ///
    /// Returns `Validation` on `function` for an unknown entry point, or on
    /// `args` for the wrong number of arguments.
    ///
    /// ```
    /// use reech_core::Invocation;
    ///
    /// let inv = Invocation::parse("TrackBatch", &["B001".to_string()]).unwrap();
    /// assert_eq!(inv, Invocation::TrackBatch { batch_id: "B001".to_string() });
    /// assert!(Invocation::parse("TrackBatch", &[]).is_err());
    /// assert!(Invocation::parse("Nope", &[]).is_err());
    /// ```
    pub fn parse(function: &str, args: &[String]) -> Result<Self> {
        let inv = match function {
            "RegisterFisher" => {
                let [id, name, govt_id] = take(function, args)?;
                Invocation::RegisterFisher { id, name, govt_id }
            }
            "GetFisher" => {
                let [id] = take(function, args)?;
                Invocation::GetFisher { id }
            }
            "LogCatch" => {
                let [catch_id, fisher_id, species, weight_kg, date] = take(function, args)?;
                Invocation::LogCatch {
                    catch_id,
                    fisher_id,
                    species,
                    weight_kg,
                    date,
                }
            }
            "GetCatch" => {
                let [catch_id] = take(function, args)?;
                Invocation::GetCatch { catch_id }
            }
            "CreateBatch" => {
                let [batch_id, catch_ids, processor_id, date] = take(function, args)?;
                Invocation::CreateBatch {
                    batch_id,
                    catch_ids,
                    processor_id,
                    date,
                }
            }
            "TrackBatch" => {
                let [batch_id] = take(function, args)?;
                Invocation::TrackBatch { batch_id }
            }
            "PlaceOrder" => {
                let [order_id, batch_id, buyer_id, date] = take(function, args)?;
                Invocation::PlaceOrder {
                    order_id,
                    batch_id,
                    buyer_id,
                    date,
                }
            }
            "GetOrder" => {
                let [order_id] = take(function, args)?;
                Invocation::GetOrder { order_id }
            }
            "GenerateReport" => {
                let [start_date, end_date] = take(function, args)?;
                Invocation::GenerateReport {
                    start_date,
                    end_date,
                }
            }
            "CreateAsset" => {
                let [id, color, size, owner, appraised_value] = take(function, args)?;
                Invocation::CreateAsset {
                    id,
                    color,
                    size,
                    owner,
                    appraised_value,
                }
            }
            "ReadAsset" => {
                let [id] = take(function, args)?;
                Invocation::ReadAsset { id }
            }
            "UpdateAsset" => {
                let [id, color, size, appraised_value] = take(function, args)?;
                Invocation::UpdateAsset {
                    id,
                    color,
                    size,
                    appraised_value,
                }
            }
            "TransferAsset" => {
                let [id, new_owner] = take(function, args)?;
                Invocation::TransferAsset { id, new_owner }
            }
            "DeleteAsset" => {
                let [id] = take(function, args)?;
                Invocation::DeleteAsset { id }
            }
            "AssetExists" => {
                let [id] = take(function, args)?;
                Invocation::AssetExists { id }
            }
            other => {
                return Err(ReechError::validation(
                    "function",
                    format!("unknown entry point '{}'", other),
                ))
            }
        };
        Ok(inv)
    }

    /// Entry point name, as used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Invocation::RegisterFisher { .. } => "RegisterFisher",
            Invocation::GetFisher { .. } => "GetFisher",
            Invocation::LogCatch { .. } => "LogCatch",
            Invocation::GetCatch { .. } => "GetCatch",
            Invocation::CreateBatch { .. } => "CreateBatch",
            Invocation::TrackBatch { .. } => "TrackBatch",
            Invocation::PlaceOrder { .. } => "PlaceOrder",
            Invocation::GetOrder { .. } => "GetOrder",
            Invocation::GenerateReport { .. } => "GenerateReport",
            Invocation::CreateAsset { .. } => "CreateAsset",
            Invocation::ReadAsset { .. } => "ReadAsset",
            Invocation::UpdateAsset { .. } => "UpdateAsset",
            Invocation::TransferAsset { .. } => "TransferAsset",
            Invocation::DeleteAsset { .. } => "DeleteAsset",
            Invocation::AssetExists { .. } => "AssetExists",
        }
    }

    /// Identifier of the record the call is about, if it has one
    pub fn entity_id(&self) -> Option<&str> {
        match self {
            Invocation::RegisterFisher { id, .. }
            | Invocation::GetFisher { id }
            | Invocation::CreateAsset { id, .. }
            | Invocation::ReadAsset { id }
            | Invocation::UpdateAsset { id, .. }
            | Invocation::TransferAsset { id, .. }
            | Invocation::DeleteAsset { id }
            | Invocation::AssetExists { id } => Some(id),
            Invocation::LogCatch { catch_id, .. } | Invocation::GetCatch { catch_id } => {
                Some(catch_id)
            }
            Invocation::CreateBatch { batch_id, .. } | Invocation::TrackBatch { batch_id } => {
                Some(batch_id)
            }
            Invocation::PlaceOrder { order_id, .. } | Invocation::GetOrder { order_id } => {
                Some(order_id)
            }
            Invocation::GenerateReport { .. } => None,
        }
    }

    /// Does a successful call change ledger state?
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Invocation::RegisterFisher { .. }
                | Invocation::LogCatch { .. }
                | Invocation::CreateBatch { .. }
                | Invocation::PlaceOrder { .. }
                | Invocation::CreateAsset { .. }
                | Invocation::UpdateAsset { .. }
                | Invocation::TransferAsset { .. }
                | Invocation::DeleteAsset { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_log_catch_binds_positionally() {
        let inv = Invocation::parse(
            "LogCatch",
            &args(&["C001", "F001", "Tuna", "10.5", "2025-08-09"]),
        )
        .unwrap();
        match inv {
            Invocation::LogCatch {
                fisher_id,
                weight_kg,
                ..
            } => {
                assert_eq!(fisher_id, "F001");
                assert_eq!(weight_kg, "10.5");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_arity_error_names_function() {
        let err = Invocation::parse("RegisterFisher", &args(&["F001"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid args: RegisterFisher takes 3 argument(s), got 1"
        );
    }

    #[test]
    fn test_every_function_name_round_trips() {
        for name in FUNCTIONS {
            let arity = (0..=5)
                .find(|n| Invocation::parse(name, &vec!["x".to_string(); *n]).is_ok())
                .unwrap_or_else(|| panic!("{} accepts no arity", name));
            let inv = Invocation::parse(name, &vec!["x".to_string(); arity]).unwrap();
            assert_eq!(inv.name(), *name);
        }
    }

    #[test]
    fn test_reads_are_not_writes() {
        let read = Invocation::parse("GetFisher", &args(&["F1"])).unwrap();
        let write = Invocation::parse("DeleteAsset", &args(&["A1"])).unwrap();
        assert!(!read.is_write());
        assert!(write.is_write());
        assert_eq!(read.entity_id(), Some("F1"));
    }
}
