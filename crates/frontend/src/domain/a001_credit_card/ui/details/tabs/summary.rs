//! Summary tab - records saved during this session

use super::super::view_model::CreditCardFormVm;
use contracts::domain::a001_credit_card::{summary_headers, SummaryRow, NO_RECORDS_TEXT};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SummaryTab(vm: CreditCardFormVm) -> impl IntoView {
    let saved = vm.saved;
    let headers = summary_headers();
    let column_count = headers.len().to_string();

    view! {
        <div class="details-section">
            <Table>
                <TableHeader>
                    <TableRow>
                        {headers
                            .into_iter()
                            .map(|header| view! {
                                <TableHeaderCell resizable=true min_width=110.0>{header}</TableHeaderCell>
                            })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let column_count = column_count.clone();
                        saved
                            .with(|s| s.summary_rows())
                            .into_iter()
                            .map(move |row| match row {
                                SummaryRow::NoRecords => {
                                    let column_count = column_count.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan=column_count attr:style="padding: 24px; text-align: center; color: var(--color-text-tertiary);">
                                                {NO_RECORDS_TEXT}
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any()
                                }
                                SummaryRow::Entry { cells, .. } => view! {
                                    <TableRow>
                                        {cells
                                            .into_iter()
                                            .map(|cell| view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                                </TableCell>
                                            })
                                            .collect_view()}
                                    </TableRow>
                                }
                                .into_any(),
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
