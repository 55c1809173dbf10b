//! 商品目录过滤
//!
//! 过滤在每次渲染时同步计算，不做防抖。

use crate::date::Timestamp;
use crate::{Category, Product};
use std::cmp::Reverse;


/// 分类过滤条件，`All` 只用于过滤，不是商品的真实分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// UI 上分类标签的顺序
    pub fn options() -> [CategoryFilter; 5] {
        [
            CategoryFilter::All,
            CategoryFilter::Only(Category::Laptops),
            CategoryFilter::Only(Category::Desktops),
            CategoryFilter::Only(Category::GamingPcs),
            CategoryFilter::Only(Category::Accessories),
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// 分类 + 名称子串的组合过滤
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogFilter<'a> {
    pub category: CategoryFilter,
    pub query: &'a str,
}

impl<'a> CatalogFilter<'a> {
    pub fn new(category: CategoryFilter, query: &'a str) -> Self {
        Self { category, query }
    }

    pub fn accepts(&self, product: &Product) -> bool {
        self.category.matches(product.category) && product.name_contains(self.query)
    }

    /// 按原顺序保留通过过滤的商品
    pub fn apply<'p>(&self, products: &'p [Product]) -> Vec<&'p Product> {
        products.iter().filter(|p| self.accepts(p)).collect()
    }
}

/// 便捷函数：返回拥有所有权的过滤结果
pub fn filter_products(
    products: &[Product],
    category: CategoryFilter,
    query: &str,
) -> Vec<Product> {
    CatalogFilter::new(category, query)
        .apply(products)
        .into_iter()
        .cloned()
        .collect()
}

/// 按 `created_at` 倒序取前 `n` 个；时间缺失或无法解析的排在最后
pub fn most_recent(products: &[Product], n: usize) -> Vec<Product> {
    let mut ranked: Vec<(Option<Reverse<Timestamp>>, &Product)> = products
        .iter()
        .map(|p| {
            let created = p.created_at.as_deref().and_then(Timestamp::parse);
            (created.map(Reverse), p)
        })
        .collect();

    // sort_by 是稳定排序，时间相同的保持原顺序
    ranked.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    ranked.into_iter().take(n).map(|(_, p)| p.clone()).collect()
}
