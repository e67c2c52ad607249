use tokio_postgres::types::ToSql;

/// Text cells of one row, borrowed as Postgres parameters.
pub struct PgParamStore {
    pub params: Vec<String>,
}

impl PgParamStore {
    pub fn from_values(values: Vec<String>) -> Self {
        Self { params: values }
    }

    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_ref_per_value() {
        let store = PgParamStore::from_values(vec!["Alice".into(), "30".into()]);
        assert_eq!(store.as_refs().len(), 2);
    }
}
