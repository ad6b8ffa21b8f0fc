use std::sync::Arc;
use std::time::Instant;

use parking_lot::{Mutex, RwLock};
use rand::SeedableRng;
use rand::rngs::StdRng;
use shared::models::Shop;
use shared::util::now_millis;

use crate::core::Config;
use crate::fixtures::{DashboardData, ShopCatalog, generate_with};

/// 一批生成的店铺 (不可变快照)
#[derive(Debug, Clone)]
pub struct ShopBatch {
    pub shops: Vec<Shop>,
    /// 生成时间 (Unix 毫秒)
    pub generated_at: i64,
}

impl ShopBatch {
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }

    /// 批次内 id 从 1 连续递增，直接按下标查找
    pub fn find(&self, id: u32) -> Option<&Shop> {
        let index = (id as usize).checked_sub(1)?;
        self.shops.get(index).filter(|shop| shop.id == id)
    }
}

/// 随机源：线程随机数，或固定种子 (可复现)
enum ShopRng {
    Thread,
    Seeded(Mutex<StdRng>),
}

impl std::fmt::Debug for ShopRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Thread => f.write_str("Thread"),
            Self::Seeded(_) => f.write_str("Seeded"),
        }
    }
}

/// 店铺存储 - 持有当前批次
///
/// 读多写少：读取时克隆 `Arc` 快照，重新生成时在锁外构建新批次再整体替换，
/// 读者永远不会看到半成品批次。
#[derive(Clone, Debug)]
pub struct ShopStore {
    catalog: Arc<ShopCatalog>,
    rng: Arc<ShopRng>,
    current: Arc<RwLock<Arc<ShopBatch>>>,
}

impl ShopStore {
    /// 使用线程随机数
    pub fn new(catalog: ShopCatalog, count: usize) -> Self {
        Self::build(catalog, ShopRng::Thread, count)
    }

    /// 使用固定种子，相同种子产生相同的批次序列
    pub fn seeded(catalog: ShopCatalog, seed: u64, count: usize) -> Self {
        Self::build(
            catalog,
            ShopRng::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            count,
        )
    }

    fn build(catalog: ShopCatalog, rng: ShopRng, count: usize) -> Self {
        let catalog = Arc::new(catalog);
        let first = Self::generate_batch(&catalog, &rng, count);
        Self {
            catalog,
            rng: Arc::new(rng),
            current: Arc::new(RwLock::new(Arc::new(first))),
        }
    }

    fn generate_batch(catalog: &ShopCatalog, rng: &ShopRng, count: usize) -> ShopBatch {
        let shops = match rng {
            ShopRng::Thread => generate_with(catalog, count, &mut rand::thread_rng()),
            ShopRng::Seeded(rng) => generate_with(catalog, count, &mut *rng.lock()),
        };
        ShopBatch {
            shops,
            generated_at: now_millis(),
        }
    }

    /// 当前批次快照
    pub fn current(&self) -> Arc<ShopBatch> {
        self.current.read().clone()
    }

    /// 生成新批次并替换当前批次，旧批次随最后一个读者释放
    pub fn regenerate(&self, count: usize) -> Arc<ShopBatch> {
        let batch = Arc::new(Self::generate_batch(&self.catalog, &self.rng, count));
        *self.current.write() = batch.clone();
        tracing::info!(batch_size = batch.len(), "Shop batch regenerated");
        batch
    }

    pub fn find(&self, id: u32) -> Option<Shop> {
        self.current().find(id).cloned()
    }

    pub fn catalog(&self) -> &ShopCatalog {
        &self.catalog
    }
}

/// 服务器状态 - 持有所有共享数据
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一份成本极低。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | shops | 店铺批次存储 |
/// | dashboard | 静态看板数据 |
/// | started_at | 启动时间 (用于 uptime) |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub shops: ShopStore,
    pub dashboard: Arc<DashboardData>,
    pub started_at: Instant,
}

impl ServerState {
    /// 根据配置初始化状态并生成第一批店铺
    pub fn initialize(config: &Config) -> Self {
        let catalog = ShopCatalog::dhaka();
        let shops = match config.shop_seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded shop generator");
                ShopStore::seeded(catalog, seed, config.shop_batch_size)
            }
            None => ShopStore::new(catalog, config.shop_batch_size),
        };

        tracing::info!(
            batch_size = config.shop_batch_size,
            "Initial shop batch generated"
        );

        Self {
            config: config.clone(),
            shops,
            dashboard: Arc::new(DashboardData::load()),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_is_reproducible() {
        let a = ShopStore::seeded(ShopCatalog::dhaka(), 5, 20);
        let b = ShopStore::seeded(ShopCatalog::dhaka(), 5, 20);
        assert_eq!(a.current().shops, b.current().shops);
        assert_eq!(a.regenerate(10).shops, b.regenerate(10).shops);
    }

    #[test]
    fn test_regenerate_replaces_batch() {
        let store = ShopStore::seeded(ShopCatalog::dhaka(), 1, 20);
        let before = store.current();
        let after = store.regenerate(5);

        assert_eq!(before.len(), 20);
        assert_eq!(after.len(), 5);
        assert_eq!(store.current().len(), 5);
        // 旧快照仍然完整可读
        assert_eq!(before.shops.len(), 20);
    }

    #[test]
    fn test_regenerate_zero_gives_empty_batch() {
        let store = ShopStore::new(ShopCatalog::dhaka(), 3);
        assert!(store.regenerate(0).is_empty());
        assert!(store.find(1).is_none());
    }

    #[test]
    fn test_find_by_id() {
        let store = ShopStore::seeded(ShopCatalog::dhaka(), 2, 10);
        assert_eq!(store.find(1).map(|s| s.id), Some(1));
        assert_eq!(store.find(10).map(|s| s.id), Some(10));
        assert!(store.find(0).is_none());
        assert!(store.find(11).is_none());
    }

    #[test]
    fn test_initialize_uses_config_batch_size() {
        let mut config = Config::for_tests(3);
        config.shop_batch_size = 42;
        let state = ServerState::initialize(&config);
        assert_eq!(state.shops.current().len(), 42);
        assert_eq!(state.dashboard.vendors.len(), 5);
    }
}
