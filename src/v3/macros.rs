/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Pages through a listing starting at page 0 and yields every item.
// Stops once a page comes back empty.
macro_rules! stream_pages {
    ( $c:expr, $uri:expr, $op:expr, $rt:ty, $label:expr ) => {{
        try_stream! {
            let mut page: usize = 0;
            loop {
                let page_str = page.to_string();
                let params = [("page", page_str.as_str()), ("perPage", PAGE_SIZE_STRING)];
                let req_url = $c.endpoint($uri, Some(&params[..]))?;
                let items: Vec<$rt> = $c.get(req_url).await?.into_data($op)?;
                log::info!("Page {}: Found {} {}.", page + 1, items.len(), $label);

                if items.is_empty() {
                    break;
                }
                for item in items {
                    yield item
                }
                page += 1;
            }
        }
    }};
}

pub(crate) use stream_pages;
