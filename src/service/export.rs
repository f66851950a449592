use crate::models::Order;
use crate::service::date::format_order_date;

const HEADER: [&str; 10] = [
    "Nro Pedido",
    "Razón Social",
    "Tipo Cliente",
    "Vendedor",
    "Nro en Tango",
    "Fecha",
    "Monto",
    "Plazo",
    "Comentarios",
    "Estado",
];

/// 导出订单为 CSV
pub fn orders_to_csv(orders: &[Order]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for order in orders {
        writer.write_record([
            order.order_number.clone(),
            order.customer_name.clone(),
            order.customer_type.clone(),
            order.seller_name.clone(),
            dash_if_empty(order.tango_order_number.as_deref()),
            format_order_date(&order.date),
            order.total_amount.round(2).with_scale(2).to_string(),
            order.payment_term.to_string(),
            dash_if_empty(order.comments.as_deref()),
            order.status.label().to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

fn dash_if_empty(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
