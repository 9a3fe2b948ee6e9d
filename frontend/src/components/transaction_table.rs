use shared::{LoadState, Transaction};
use yew::prelude::*;

use super::StatusNote;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    /// Rows of the current page only
    pub transactions: Vec<Transaction>,
    pub status: LoadState,
}

fn sold_label(sold: bool) -> &'static str {
    if sold {
        "Yes"
    } else {
        "No"
    }
}

/// Row key: the record id, or the row position for records sent without one.
/// Keys must stay unique within the page.
fn row_key(index: usize, id: &str) -> String {
    if id.is_empty() {
        format!("#{index}")
    } else {
        format!("{id}#{index}")
    }
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <section class="transactions-section">
            <StatusNote status={props.status.clone()} loading_label="Loading transactions..." />
            <div class="table-container">
                <table class="transactions-table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Title"}</th>
                            <th>{"Description"}</th>
                            <th>{"Price"}</th>
                            <th>{"Category"}</th>
                            <th>{"Sold"}</th>
                            <th>{"Image"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.transactions.iter().enumerate().map(|(index, transaction)| html! {
                            <tr key={row_key(index, &transaction.id)}>
                                <td class="id">{&transaction.id}</td>
                                <td class="title">{&transaction.title}</td>
                                <td class="description">{&transaction.description}</td>
                                <td class="price">{&transaction.price}</td>
                                <td class="category">{&transaction.category}</td>
                                <td class={classes!("sold", transaction.sold.then_some("is-sold"))}>
                                    {sold_label(transaction.sold)}
                                </td>
                                <td class="image">
                                    <img
                                        src={transaction.image.clone()}
                                        alt={transaction.title.clone()}
                                        width="50"
                                    />
                                </td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
