use chrono::Utc;
use gcal_api::endpoints::events::OrderBy;
use gcal_api::{CalendarApiError, Client, Request};

#[tokio::main]
pub async fn main() -> Result<(), CalendarApiError> {
    let client = Client::new("access_token");

    let req = Request::events()
        .list()
        .time_min(Utc::now())
        .max_results(10u32)
        .single_events(true)
        .order_by(OrderBy::StartTime);

    let res = client.send(req).await?;
    for event in res.items {
        println!(
            "{}: {}",
            event.start.display().unwrap_or_default(),
            event.summary.unwrap_or_default()
        );
    }
    Ok(())
}
