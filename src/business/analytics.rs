//! Sample analytics data and the aggregation of its displayed totals.

/// Sales for one weekday of the current week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySales {
    /// A three-letter weekday label.
    pub day: &'static str,
    /// The day's sales in euro.
    pub sales: f64,
}

/// Sales for one month of the current year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySales {
    /// A three-letter month label.
    pub month: &'static str,
    /// The month's sales in euro.
    pub sales: f64,
}

/// One product group's share of sales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductShare {
    /// The product group name.
    pub name: &'static str,
    /// The share of total sales, in percent.
    pub percent: f64,
}

/// Customer and sales figures for one two-hour slot of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyTraffic {
    /// The slot label, e.g. "20-22".
    pub slot: &'static str,
    /// The number of customers served in the slot.
    pub customers: u32,
    /// The slot's sales in euro.
    pub sales: f64,
}

/// Sales and profit for one product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductSales {
    /// The product name.
    pub name: &'static str,
    /// The product's category label.
    pub category: &'static str,
    /// Units sold.
    pub units: u32,
    /// The profit in euro.
    pub profit: f64,
}

const DAILY_SALES: [DailySales; 7] = [
    DailySales { day: "Mon", sales: 1200.0 },
    DailySales { day: "Tue", sales: 980.0 },
    DailySales { day: "Wed", sales: 1400.0 },
    DailySales { day: "Thu", sales: 1800.0 },
    DailySales { day: "Fri", sales: 2400.0 },
    DailySales { day: "Sat", sales: 2800.0 },
    DailySales { day: "Sun", sales: 1900.0 },
];

const MONTHLY_SALES: [MonthlySales; 12] = [
    MonthlySales { month: "Jan", sales: 28000.0 },
    MonthlySales { month: "Feb", sales: 25000.0 },
    MonthlySales { month: "Mar", sales: 32000.0 },
    MonthlySales { month: "Apr", sales: 34000.0 },
    MonthlySales { month: "May", sales: 39000.0 },
    MonthlySales { month: "Jun", sales: 42000.0 },
    MonthlySales { month: "Jul", sales: 48000.0 },
    MonthlySales { month: "Aug", sales: 51000.0 },
    MonthlySales { month: "Sep", sales: 47000.0 },
    MonthlySales { month: "Oct", sales: 43000.0 },
    MonthlySales { month: "Nov", sales: 38000.0 },
    MonthlySales { month: "Dec", sales: 45000.0 },
];

const PRODUCT_SHARES: [ProductShare; 4] = [
    ProductShare { name: "Beer", percent: 45.0 },
    ProductShare { name: "Coffee", percent: 20.0 },
    ProductShare { name: "Food", percent: 25.0 },
    ProductShare { name: "Wine", percent: 10.0 },
];

const HOURLY_TRAFFIC: [HourlyTraffic; 8] = [
    HourlyTraffic { slot: "8-10", customers: 15, sales: 120.0 },
    HourlyTraffic { slot: "10-12", customers: 25, sales: 250.0 },
    HourlyTraffic { slot: "12-14", customers: 65, sales: 780.0 },
    HourlyTraffic { slot: "14-16", customers: 35, sales: 420.0 },
    HourlyTraffic { slot: "16-18", customers: 40, sales: 480.0 },
    HourlyTraffic { slot: "18-20", customers: 75, sales: 900.0 },
    HourlyTraffic { slot: "20-22", customers: 90, sales: 1350.0 },
    HourlyTraffic { slot: "22-00", customers: 60, sales: 900.0 },
];

const TOP_PRODUCTS: [ProductSales; 5] = [
    ProductSales { name: "Estrella Damm", category: "Beer", units: 450, profit: 675.0 },
    ProductSales { name: "Café con Leche", category: "Coffee", units: 320, profit: 480.0 },
    ProductSales { name: "Bocadillo Jamón", category: "Food", units: 280, profit: 560.0 },
    ProductSales { name: "Patatas Bravas", category: "Food", units: 250, profit: 375.0 },
    ProductSales { name: "Voll Damm", category: "Beer", units: 220, profit: 330.0 },
];

const PAYMENT_METHOD_SHARES: [ProductShare; 3] = [
    ProductShare { name: "Card", percent: 65.0 },
    ProductShare { name: "Cash", percent: 25.0 },
    ProductShare { name: "Mobile", percent: 10.0 },
];

/// Sales per weekday for the current week.
pub fn daily_sales() -> &'static [DailySales] {
    &DAILY_SALES
}

/// Sales per month for the current year.
pub fn monthly_sales() -> &'static [MonthlySales] {
    &MONTHLY_SALES
}

/// Share of sales per product group.
pub fn product_shares() -> &'static [ProductShare] {
    &PRODUCT_SHARES
}

/// Customers and sales per two-hour slot.
pub fn hourly_traffic() -> &'static [HourlyTraffic] {
    &HOURLY_TRAFFIC
}

/// The best-selling products with their profit.
pub fn top_products() -> &'static [ProductSales] {
    &TOP_PRODUCTS
}

/// Share of sales per payment method.
pub fn payment_method_shares() -> &'static [ProductShare] {
    &PAYMENT_METHOD_SHARES
}

/// The week's total sales.
pub fn week_total(sales: &[DailySales]) -> f64 {
    sales.iter().map(|day| day.sales).sum()
}

/// The slot with the most customers, or `None` for an empty day.
pub fn busiest_slot(traffic: &[HourlyTraffic]) -> Option<&HourlyTraffic> {
    traffic.iter().max_by_key(|slot| slot.customers)
}

/// The total number of customers across all slots.
pub fn total_customers(traffic: &[HourlyTraffic]) -> u32 {
    traffic.iter().map(|slot| slot.customers).sum()
}

/// The product with the most units sold, or `None` for an empty list.
pub fn top_seller(products: &[ProductSales]) -> Option<&ProductSales> {
    products.iter().max_by_key(|product| product.units)
}

/// The total profit across all listed products.
pub fn total_profit(products: &[ProductSales]) -> f64 {
    products.iter().map(|product| product.profit).sum()
}
