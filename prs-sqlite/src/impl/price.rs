use crate::{
    Db,
    types::{DateTime, PriceRow},
};
use prs_core::{
    models::{BrandId, PriceRecord, ProductId},
    ports::PriceRepository,
};

impl PriceRepository for Db {
    async fn find_candidates(
        &self,
        product_id: ProductId,
        brand_id: BrandId,
        at: prs_core::models::DateTime,
    ) -> Result<Vec<PriceRecord>, Self::Error> {
        let rows = sqlx::query_as::<_, PriceRow>(
            r#"
            select
                id,
                product_id,
                brand_id,
                start_date,
                end_date,
                price_list,
                priority,
                price,
                currency
            from
                price
            where
                brand_id = $1
            and
                product_id = $2
            and
                $3 between start_date and end_date
            "#,
        )
        .bind(brand_id.get())
        .bind(product_id.get())
        .bind(DateTime(at))
        .fetch_all(&self.reader)
        .await?;

        // A row that does not satisfy the model is a storage fault, not a miss.
        rows.into_iter()
            .map(|row| PriceRecord::try_from(row).map_err(|err| sqlx::Error::Decode(Box::new(err))))
            .collect()
    }
}
