use shared::{BookingRow, DashboardStats};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingsTableProps {
    pub rows: Vec<BookingRow>,
    pub stats: DashboardStats,
}

#[function_component(BookingsTable)]
pub fn bookings_table(props: &BookingsTableProps) -> Html {
    html! {
        <section class="bookings-section">
            <div class="stats">
                <div class="stat-card">
                    <span class="stat-value">{props.stats.total_bookings}</span>
                    <span class="stat-label">{"Total Bookings"}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{props.stats.upcoming_bookings}</span>
                    <span class="stat-label">{"Upcoming"}</span>
                </div>
            </div>

            <table id="bookings-table">
                <thead>
                    <tr>
                        <th>{"Date / Time"}</th>
                        <th>{"Customer"}</th>
                        <th>{"Mobile"}</th>
                        <th>{"Design"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.rows.is_empty() {
                        html! {
                            <tr><td colspan="5" class="empty-row">{"No bookings found."}</td></tr>
                        }
                    } else {
                        html! {
                            {for props.rows.iter().map(|row| html! {
                                <tr key={row.booking_id}>
                                    <td>{&row.booking_date}<br /><small>{&row.booking_time}</small></td>
                                    <td>{&row.customer_name}</td>
                                    <td>{&row.customer_mobile}</td>
                                    <td>{&row.design_name}</td>
                                    <td><span class="status-confirmed">{row.status.to_string()}</span></td>
                                </tr>
                            })}
                        }
                    }}
                </tbody>
            </table>
        </section>
    }
}
