use crate::{
    file::csv::reader::CsvTable,
    sql::base::{adapter::SqlAdapter, connector::DbConnector, error::RepositoryError},
};
use model::{
    core::identifiers::TableName,
    records::{columns::ColumnSet, row::Row, table::TableDescriptor},
};
use planner::query::generator::QueryGenerator;
use tracing::{debug, info, warn};

/// Creates the destination table and writes rows through one connector.
pub struct DataRepository<'a, A: SqlAdapter> {
    connector: &'a DbConnector<A>,
    table_name: TableName,
}

/// What [`DataRepository::load`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    pub table_created: bool,
    pub rows_inserted: u64,
}

impl<'a, A: SqlAdapter> DataRepository<'a, A> {
    pub fn new(connector: &'a DbConnector<A>, table_name: TableName) -> Self {
        DataRepository {
            connector,
            table_name,
        }
    }

    pub fn table_name(&self) -> &TableName {
        &self.table_name
    }

    /// Issues `CREATE TABLE IF NOT EXISTS` for `columns` plus the surrogate key.
    ///
    /// Returns `false` without checking or touching anything when there is no
    /// connection. An existing table is left as it is, even if its columns
    /// differ.
    pub async fn create_table(&self, columns: &ColumnSet) -> Result<bool, RepositoryError> {
        let Some(connection) = self.connector.get_connection() else {
            warn!(
                "No connection, skipping creation of table '{}'",
                self.table_name
            );
            return Ok(false);
        };

        let dialect = self.connector.dialect();
        let table = TableDescriptor::new(self.table_name.clone(), columns.clone());
        if table.columns.is_empty() {
            return Err(RepositoryError::NoColumns(self.table_name.to_string()));
        }
        if let Some(column) = table.surrogate_conflict(dialect.case_sensitive_identifiers()) {
            return Err(RepositoryError::SurrogateKeyConflict(column.to_string()));
        }

        let sql = QueryGenerator::new(dialect).create_table(&table);
        debug!("CREATE statement: {}", sql);

        connection.exec(&sql).await?;
        info!(
            "Ensured table '{}' with {} text columns",
            self.table_name,
            table.columns.len()
        );
        Ok(true)
    }

    /// Inserts every row with one parameterized statement and one commit.
    ///
    /// The column list comes from the first row; any row whose keys differ
    /// from it fails the whole call before anything is written.
    pub async fn insert_data(&self, rows: &[Row]) -> Result<u64, RepositoryError> {
        let Some(first) = rows.first() else {
            return Ok(0);
        };

        let Some(connection) = self.connector.get_connection() else {
            warn!(
                "No connection, skipping insert of {} rows into '{}'",
                rows.len(),
                self.table_name
            );
            return Ok(0);
        };

        let columns: Vec<String> = first.columns().map(str::to_string).collect();
        validate_rows(&columns, rows)?;

        let (sql, _) = QueryGenerator::new(self.connector.dialect())
            .insert(self.table_name.as_str(), &columns);
        debug!("INSERT statement: {}", sql);

        let values = rows.iter().cloned().map(Row::into_values).collect();
        let written = connection.exec_batch(&sql, values).await?;
        info!("Inserted {} rows into '{}'", written, self.table_name);
        Ok(written)
    }

    /// Creates the table when the file had a header, then inserts its rows.
    ///
    /// Every row must carry exactly the header's columns, in order; the first
    /// row that does not fails the load before any statement runs.
    pub async fn load(&self, table: &CsvTable) -> Result<LoadOutcome, RepositoryError> {
        if self.connector.is_connected() {
            validate_rows(table.columns.names(), &table.rows)?;
        }

        let table_created = if table.columns.is_empty() {
            false
        } else {
            self.create_table(&table.columns).await?
        };
        let rows_inserted = self.insert_data(&table.rows).await?;

        Ok(LoadOutcome {
            table_created,
            rows_inserted,
        })
    }
}

fn validate_rows(columns: &[String], rows: &[Row]) -> Result<(), RepositoryError> {
    match rows.iter().position(|row| !row.has_columns(columns)) {
        Some(idx) => Err(RepositoryError::ColumnMismatch {
            row: idx + 1,
            expected: columns.to_vec(),
            found: rows[idx].columns().map(str::to_string).collect(),
        }),
        None => Ok(()),
    }
}
