// ==========================================
// 库存销售管理系统 - 品类仓储
// ==========================================
// 职责: 管理 categories 表的数据访问
// 说明: 品类只增不改,接口面只有查询与插入
// ==========================================

use crate::domain::category::{Category, NewCategory};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex, MutexGuard};

pub struct CategoryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CategoryRepository {
    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询所有品类（按ID升序）
    pub fn list_all(&self) -> RepositoryResult<Vec<Category>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY id")?;

        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<Category>>>()?;

        Ok(categories)
    }

    /// 插入单个品类
    pub fn insert(&self, new: NewCategory) -> RepositoryResult<Category> {
        let conn = self.get_conn()?;
        conn.execute("INSERT INTO categories (name) VALUES (?1)", params![new.name])?;

        let id = conn.last_insert_rowid();
        Ok(Category::from_new(id, new))
    }

    /// 品类总数
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        Ok(count)
    }

    /// 批量插入品类（种子数据装载用,单事务）
    pub fn batch_insert(&self, rows: Vec<NewCategory>) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let mut count = 0;
        for row in rows {
            tx.execute("INSERT INTO categories (name) VALUES (?1)", params![row.name])?;
            count += 1;
        }

        tx.commit()?;
        Ok(count)
    }
}
