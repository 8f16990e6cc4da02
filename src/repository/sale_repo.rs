// ==========================================
// 库存销售管理系统 - 销售记录仓储
// ==========================================
// 职责: 管理 sales 表的数据访问与汇总查询
// 说明: 销售记录只增不改,接口面只有查询、插入与汇总
// ==========================================

use crate::domain::sale::{NewSale, Sale};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Result as SqliteResult, ToSql};
use std::sync::{Arc, Mutex, MutexGuard};

pub struct SaleRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SaleRepository {
    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询销售记录（可选日期区间过滤,边界含端点）
    ///
    /// # 参数
    /// - start: 起始日期（含）
    /// - end: 截止日期（含）
    ///
    /// # 说明
    /// - date 以 ISO 格式（YYYY-MM-DD）落库,字符串比较与日期序一致
    pub fn list(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> RepositoryResult<Vec<Sale>> {
        let conn = self.get_conn()?;

        let mut sql = String::from(
            "SELECT id, product_id, quantity, total_price, date FROM sales WHERE 1=1",
        );
        let mut params_vec: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(start) = start {
            sql.push_str(" AND date >= ?");
            params_vec.push(Box::new(start.to_string()));
        }
        if let Some(end) = end {
            sql.push_str(" AND date <= ?");
            params_vec.push(Box::new(end.to_string()));
        }
        sql.push_str(" ORDER BY id");

        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn ToSql> = params_vec.iter().map(|p| p.as_ref()).collect();

        let sales = stmt
            .query_map(params_refs.as_slice(), Self::map_row)?
            .collect::<SqliteResult<Vec<Sale>>>()?;

        Ok(sales)
    }

    /// 插入单条销售记录
    pub fn insert(&self, new: NewSale) -> RepositoryResult<Sale> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO sales (product_id, quantity, total_price, date)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                new.product_id,
                new.quantity,
                new.total_price,
                new.date.to_string(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        Ok(Sale::from_new(id, new))
    }

    /// 销售记录总数
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM sales", [], |row| row.get(0))?;
        Ok(count)
    }

    /// 批量插入销售记录（种子数据装载用,单事务）
    pub fn batch_insert(&self, rows: Vec<NewSale>) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let mut count = 0;
        for row in rows {
            tx.execute(
                r#"
                INSERT INTO sales (product_id, quantity, total_price, date)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![row.product_id, row.quantity, row.total_price, row.date.to_string()],
            )?;
            count += 1;
        }

        tx.commit()?;
        Ok(count)
    }

    /// 全表汇总 total_price
    ///
    /// # 说明
    /// - 空表返回 0.0（SUM 为 NULL 时取 0）
    pub fn total_sales(&self) -> RepositoryResult<f64> {
        let conn = self.get_conn()?;
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(total_price), 0.0) FROM sales",
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> SqliteResult<Sale> {
        let date_str: String = row.get(4)?;
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;

        Ok(Sale {
            id: row.get(0)?,
            product_id: row.get(1)?,
            quantity: row.get(2)?,
            total_price: row.get(3)?,
            date,
        })
    }
}
