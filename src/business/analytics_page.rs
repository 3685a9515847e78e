//! Chart generation and the route handler for the vendor analytics page.
//!
//! The charts are generated as JSON configuration for the ECharts
//! library and rendered with corresponding HTML containers and
//! JavaScript initialization code. All figures come from the sample
//! data in [super::analytics]; this module only shapes and displays it.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Bar, Line},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    Error, endpoints,
    html::{HeadElement, SCREEN_HEADER_STYLE, SCREEN_STYLE, SUMMARY_CARD_STYLE, base},
    money::{format_amount, format_amount_rounded},
    navigation::NavBar,
};

use super::analytics::{
    busiest_slot, daily_sales, hourly_traffic, monthly_sales, payment_method_shares,
    product_shares, top_products, top_seller, total_customers, week_total,
};

/// An analytics chart with its HTML container ID and ECharts configuration.
struct AnalyticsChart {
    /// The HTML element ID to use for the chart (kebab-case)
    id: &'static str,
    /// The ECharts configuration as a JSON string
    options: String,
}

/// Render the analytics page: summary cards, sales and product charts,
/// and the top products table.
pub async fn get_analytics_page() -> Result<Markup, Error> {
    let charts = build_analytics_charts();
    let nav_bar = NavBar::business(endpoints::ANALYTICS_VIEW).into_html();

    let busiest = busiest_slot(hourly_traffic());
    let top = top_seller(top_products());

    let content = html!(
        section class=(SCREEN_STYLE)
        {
            header class=(SCREEN_HEADER_STYLE)
            {
                h1 class="text-2xl font-bold" { "Analytics" }
                p class="text-gray-400 text-sm" { "Bar de La FIB" }
            }

            div class="grid grid-cols-2 gap-4 px-4 py-2"
            {
                div class=(SUMMARY_CARD_STYLE)
                {
                    div class="text-sm text-gray-400" { "Sales this week" }
                    div class="text-2xl font-bold" data-week-total="true"
                    {
                        (format_amount_rounded(week_total(daily_sales())))
                    }
                }

                div class=(SUMMARY_CARD_STYLE)
                {
                    div class="text-sm text-gray-400" { "Customers this day" }
                    div class="text-2xl font-bold" data-customer-total="true"
                    {
                        (total_customers(hourly_traffic()))
                    }
                }

                @if let Some(slot) = busiest {
                    div class=(SUMMARY_CARD_STYLE)
                    {
                        div class="text-sm text-gray-400" { "Busiest hours" }
                        div class="text-2xl font-bold" data-busiest-slot="true" { (slot.slot) }
                    }
                }

                @if let Some(product) = top {
                    div class=(SUMMARY_CARD_STYLE)
                    {
                        div class="text-sm text-gray-400" { "Top seller" }
                        div class="text-2xl font-bold" data-top-seller="true" { (product.name) }
                    }
                }
            }

            (charts_view(&charts))

            (top_products_table())

            (nav_bar)
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(&charts),
    ];

    Ok(base("Analytics", &scripts, &content))
}

/// Creates the array of analytics charts from the sample data.
///
/// The chart options are serialized to JSON for ECharts consumption.
fn build_analytics_charts() -> [AnalyticsChart; 5] {
    [
        AnalyticsChart {
            id: "weekly-sales-chart",
            options: weekly_sales_chart().to_string(),
        },
        AnalyticsChart {
            id: "monthly-sales-chart",
            options: monthly_sales_chart().to_string(),
        },
        AnalyticsChart {
            id: "hourly-traffic-chart",
            options: hourly_traffic_chart().to_string(),
        },
        AnalyticsChart {
            id: "product-share-chart",
            options: product_share_chart().to_string(),
        },
        AnalyticsChart {
            id: "payment-methods-chart",
            options: payment_methods_chart().to_string(),
        },
    ]
}

/// Renders the HTML containers for the analytics charts.
fn charts_view(charts: &[AnalyticsChart]) -> Markup {
    html!(
        section id="charts" class="w-full mx-auto mb-4 px-4"
        {
            div class="grid grid-cols-1 gap-4"
            {
                @for chart in charts {
                    div id=(chart.id) class="min-h-[300px] rounded bg-gray-900" {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for the analytics charts.
///
/// Creates a script that initializes ECharts instances with responsive
/// resizing once the document has loaded.
fn charts_script(charts: &[AnalyticsChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom, 'dark');
                    chart.setOption({});

                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{script_content}\n}});"
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

fn weekly_sales_chart() -> Chart {
    let labels: Vec<String> = daily_sales().iter().map(|day| day.day.to_owned()).collect();
    let values: Vec<f64> = daily_sales().iter().map(|day| day.sales).collect();

    Chart::new()
        .title(Title::new().text("Sales").subtext("This week"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name("Sales").data(values))
}

fn monthly_sales_chart() -> Chart {
    let labels: Vec<String> = monthly_sales()
        .iter()
        .map(|month| month.month.to_owned())
        .collect();
    let values: Vec<f64> = monthly_sales().iter().map(|month| month.sales).collect();

    Chart::new()
        .title(Title::new().text("Sales").subtext("This year"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Sales").data(values))
}

fn hourly_traffic_chart() -> Chart {
    let labels: Vec<String> = hourly_traffic()
        .iter()
        .map(|slot| slot.slot.to_owned())
        .collect();
    let sales: Vec<f64> = hourly_traffic().iter().map(|slot| slot.sales).collect();
    let customers: Vec<f64> = hourly_traffic()
        .iter()
        .map(|slot| f64::from(slot.customers))
        .collect();

    Chart::new()
        .title(Title::new().text("Traffic").subtext("Sales and customers per hour"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new().top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(Bar::new().name("Sales").data(sales))
        .series(Line::new().name("Customers").data(customers))
}

fn product_share_chart() -> Chart {
    share_chart(
        "Products",
        "Share of sales",
        product_shares().iter().map(|share| share.name.to_owned()),
        product_shares().iter().map(|share| share.percent),
    )
}

fn payment_methods_chart() -> Chart {
    share_chart(
        "Payments",
        "Share per method",
        payment_method_shares()
            .iter()
            .map(|share| share.name.to_owned()),
        payment_method_shares().iter().map(|share| share.percent),
    )
}

fn share_chart(
    title: &str,
    subtitle: &str,
    labels: impl Iterator<Item = String>,
    percentages: impl Iterator<Item = f64>,
) -> Chart {
    Chart::new()
        .title(Title::new().text(title).subtext(subtitle))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(percent_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels.collect::<Vec<String>>()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(percent_formatter())),
        )
        .series(Bar::new().name("Share").data(percentages.collect::<Vec<f64>>()))
}

fn top_products_table() -> Markup {
    html!(
        section class="px-4 mb-6"
        {
            h2 class="text-xl font-semibold mb-2" { "Top products" }

            table class="w-full text-sm text-left text-gray-400"
            {
                thead class="text-xs text-gray-500 uppercase"
                {
                    tr
                    {
                        th scope="col" class="py-2" { "Product" }
                        th scope="col" class="py-2" { "Category" }
                        th scope="col" class="py-2 text-right" { "Units" }
                        th scope="col" class="py-2 text-right" { "Profit" }
                    }
                }

                tbody
                {
                    @for product in top_products() {
                        tr class="border-t border-gray-800" data-product-row="true"
                        {
                            td class="py-2 text-white" { (product.name) }
                            td class="py-2" { (product.category) }
                            td class="py-2 text-right" { (product.units) }
                            td class="py-2 text-right" { (format_amount(product.profit)) }
                        }
                    }
                }
            }
        }
    )
}

#[inline]
fn percent_formatter() -> JsFunction {
    JsFunction::new_with_args("number", "return number + '%';")
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('de-DE', {
              style: 'currency',
              currency: 'EUR'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::{build_analytics_charts, get_analytics_page};

    #[tokio::test]
    async fn analytics_page_shows_summary_figures() {
        let markup = get_analytics_page().await.unwrap();

        let html = Html::parse_document(&markup.into_string());

        let week_total_selector = Selector::parse("div[data-week-total='true']").unwrap();
        let week_total = html
            .select(&week_total_selector)
            .next()
            .expect("No week total found")
            .text()
            .collect::<String>();
        assert_eq!(week_total.trim(), "12.480 €");

        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("20-22"));
        assert!(text.contains("Estrella Damm"));
        assert!(text.contains("405"));
    }

    #[tokio::test]
    async fn analytics_page_renders_a_container_per_chart() {
        let markup = get_analytics_page().await.unwrap();

        let html = Html::parse_document(&markup.into_string());

        for chart in build_analytics_charts() {
            let selector = Selector::parse(&format!("div#{}", chart.id)).unwrap();
            assert!(
                html.select(&selector).next().is_some(),
                "No container for chart {}",
                chart.id
            );
        }
    }

    #[tokio::test]
    async fn analytics_page_lists_the_top_products() {
        let markup = get_analytics_page().await.unwrap();

        let html = Html::parse_document(&markup.into_string());
        let row_selector = Selector::parse("tr[data-product-row='true']").unwrap();

        assert_eq!(html.select(&row_selector).count(), 5);
    }

    #[test]
    fn chart_options_carry_the_sample_data() {
        let charts = build_analytics_charts();

        let weekly = &charts[0];
        assert!(weekly.options.contains("Mon"));
        assert!(weekly.options.contains("2800"));

        let monthly = &charts[1];
        assert!(monthly.options.contains("Aug"));
        assert!(monthly.options.contains("51000"));

        let products = &charts[3];
        assert!(products.options.contains("Beer"));
    }
}
