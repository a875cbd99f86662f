//! Database connection management.

use std::error::Error;
use std::path::Path;

use cozo::{DbInstance, ScriptMutability};

use super::backend::{DatabaseBackend, Params, QueryResult};
use super::value::extract_string;
use super::DbError;

/// CozoDB backend, either SQLite-backed or in-memory.
pub struct CozoBackend {
    db: DbInstance,
    name: &'static str,
}

impl CozoBackend {
    /// Open a CozoDB database backed by SQLite storage.
    pub fn sqlite(path: &Path) -> Result<Self, Box<dyn Error>> {
        let db = DbInstance::new("sqlite", path, "").map_err(|e| DbError::OpenFailed {
            path: path.display().to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self { db, name: "CozoSqlite" })
    }

    /// Create an in-memory database instance.
    pub fn mem() -> Result<Self, Box<dyn Error>> {
        let db = DbInstance::new("mem", "", "").map_err(|e| DbError::OpenFailed {
            path: ":memory:".to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self { db, name: "CozoMem" })
    }
}

impl DatabaseBackend for CozoBackend {
    fn execute_query(&self, script: &str, params: &Params) -> Result<QueryResult, Box<dyn Error>> {
        let rows = self
            .db
            .run_script(script, params.clone(), ScriptMutability::Mutable)
            .map_err(|e| DbError::QueryFailed {
                message: format!("{:?}", e),
            })?;
        Ok(QueryResult {
            headers: rows.headers,
            rows: rows.rows,
        })
    }

    fn backend_name(&self) -> &'static str {
        self.name
    }

    fn relation_exists(&self, name: &str) -> Result<bool, Box<dyn Error>> {
        let result = self.execute_query_no_params("::relations")?;
        let name_idx = result.column_index("name").unwrap_or(0);
        Ok(result
            .rows
            .iter()
            .any(|row| row.get(name_idx).and_then(extract_string).as_deref() == Some(name)))
    }

    fn try_create_relation(&self, ddl: &str) -> Result<bool, Box<dyn Error>> {
        if let Some(name) = created_relation_name(ddl) {
            if self.relation_exists(name)? {
                return Ok(false);
            }
        }
        match self.execute_query_no_params(ddl) {
            Ok(_) => Ok(true),
            Err(e) => {
                let err_str = e.to_string();
                if err_str.contains("AlreadyExists") || err_str.contains("stored_relation_conflict") {
                    Ok(false)
                } else {
                    Err(e)
                }
            }
        }
    }
}

/// Name of the relation a `:create` statement defines.
fn created_relation_name(ddl: &str) -> Option<&str> {
    let rest = ddl.trim_start().strip_prefix(":create")?.trim_start();
    let end = rest.find(|c: char| c.is_whitespace() || c == '{')?;
    Some(&rest[..end])
}

/// Open a database at the given path.
///
/// `:memory:` opens an in-memory instance, anything else is a SQLite file.
pub fn open_db(path: &Path) -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
    let url = path.to_string_lossy();
    super::DatabaseConfig::from_url(&url)?.connect()
}

/// Create an in-memory database instance without any schema.
pub fn open_mem_db() -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
    Ok(Box::new(CozoBackend::mem()?))
}
