// ==========================================
// 库存销售管理系统 - 商品仓储
// ==========================================
// 职责: 管理 products 表的 CRUD 操作
// 红线: 不含业务逻辑，只负责数据访问
// ==========================================

use crate::domain::product::{NewProduct, Product};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex, MutexGuard};

pub struct ProductRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProductRepository {
    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询所有商品（按ID升序）
    pub fn list_all(&self) -> RepositoryResult<Vec<Product>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, description, price, brand, category_id FROM products ORDER BY id",
        )?;

        let products = stmt
            .query_map([], Self::map_row)?
            .collect::<SqliteResult<Vec<Product>>>()?;

        Ok(products)
    }

    /// 按ID查询商品
    ///
    /// # 返回
    /// - Ok(Some(Product)): 找到记录
    /// - Ok(None): 未找到记录
    pub fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, description, price, brand, category_id FROM products WHERE id = ?1",
        )?;

        let result = stmt.query_row(params![id], Self::map_row);

        match result {
            Ok(product) => Ok(Some(product)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 插入单个商品
    ///
    /// # 返回
    /// - Ok(Product): 含数据库分配ID的完整记录
    pub fn insert(&self, new: NewProduct) -> RepositoryResult<Product> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO products (name, description, price, brand, category_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                new.name,
                new.description,
                new.price,
                new.brand,
                new.category_id,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Ok(Product::from_new(id, new))
    }

    /// 批量插入商品（单事务,全部成功或全部失败）
    ///
    /// # 参数
    /// - staged: 已校验的暂存记录（文件顺序）
    ///
    /// # 返回
    /// - Ok(Vec<Product>): 按输入顺序回填ID后的记录
    ///
    /// # 说明
    /// - 使用事务确保原子性：任一行失败则整批回滚,读者不可见任何记录
    pub fn batch_insert(&self, staged: Vec<NewProduct>) -> RepositoryResult<Vec<Product>> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let mut created = Vec::with_capacity(staged.len());
        for new in staged {
            tx.execute(
                r#"
                INSERT INTO products (name, description, price, brand, category_id)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    new.name,
                    new.description,
                    new.price,
                    new.brand,
                    new.category_id,
                ],
            )?;
            let id = tx.last_insert_rowid();
            created.push(Product::from_new(id, new));
        }

        tx.commit()?;
        Ok(created)
    }

    /// 按ID整体替换商品（覆盖全部可变字段）
    ///
    /// # 返回
    /// - Ok(Product): 替换后的完整记录
    /// - Err(NotFound): 目标记录不存在
    pub fn update(&self, id: i64, new: NewProduct) -> RepositoryResult<Product> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            r#"
            UPDATE products
            SET name = ?1, description = ?2, price = ?3, brand = ?4, category_id = ?5
            WHERE id = ?6
            "#,
            params![
                new.name,
                new.description,
                new.price,
                new.brand,
                new.category_id,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Product".to_string(),
                id: id.to_string(),
            });
        }

        Ok(Product::from_new(id, new))
    }

    /// 按ID删除商品
    ///
    /// # 返回
    /// - Err(NotFound): 目标记录不存在
    pub fn delete(&self, id: i64) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;

        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Product".to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }

    /// 商品总数（用于导入前后对账）
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        Ok(count)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> SqliteResult<Product> {
        Ok(Product {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            price: row.get(3)?,
            brand: row.get(4)?,
            category_id: row.get(5)?,
        })
    }
}
