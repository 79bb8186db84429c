use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{
    bed, bookshelf, chair, Bed, Bookshelf, Chair, ProductType, WarehouseLocation,
};
use crate::errors::ServiceError;
use crate::models::{ProductRecord, ProductSnapshot};

/// A table holding one product variant.
///
/// Implemented by each catalog entity so lookups can be written once and
/// dispatched on [`ProductType`].
pub trait CatalogTable: EntityTrait {
    const PRODUCT_TYPE: ProductType;

    fn model_no_column() -> Self::Column;

    fn snapshot(model: Self::Model) -> ProductSnapshot;
}

macro_rules! catalog_table {
    ($entity:ty, $module:ident, $product_type:expr) => {
        impl CatalogTable for $entity {
            const PRODUCT_TYPE: ProductType = $product_type;

            fn model_no_column() -> Self::Column {
                $module::Column::ModelNo
            }

            fn snapshot(model: $module::Model) -> ProductSnapshot {
                ProductSnapshot {
                    product_type: Self::PRODUCT_TYPE,
                    id: model.id,
                    model_no: model.model_no,
                    category: model.category,
                    warehouse_location: model.warehouse_location,
                    stock_level: model.stock_level,
                    price: model.price,
                }
            }
        }
    };
}

catalog_table!(Chair, chair, ProductType::Chair);
catalog_table!(Bed, bed, ProductType::Bed);
catalog_table!(Bookshelf, bookshelf, ProductType::Bookshelf);

async fn find_in<E, C>(conn: &C, model_no: &str) -> Result<Option<ProductSnapshot>, ServiceError>
where
    E: CatalogTable,
    C: ConnectionTrait,
{
    let model = E::find()
        .filter(E::model_no_column().eq(model_no))
        .one(conn)
        .await?;
    Ok(model.map(E::snapshot))
}

async fn list_in<E, C>(conn: &C) -> Result<Vec<ProductSnapshot>, ServiceError>
where
    E: CatalogTable,
    C: ConnectionTrait,
{
    let models = E::find()
        .order_by_asc(E::model_no_column())
        .all(conn)
        .await?;
    Ok(models.into_iter().map(E::snapshot).collect())
}

/// Resolves (variant, model number) to a product, on any connection or
/// open transaction.
pub async fn find_product<C: ConnectionTrait>(
    conn: &C,
    product_type: ProductType,
    model_no: &str,
) -> Result<Option<ProductSnapshot>, ServiceError> {
    match product_type {
        ProductType::Chair => find_in::<Chair, _>(conn, model_no).await,
        ProductType::Bed => find_in::<Bed, _>(conn, model_no).await,
        ProductType::Bookshelf => find_in::<Bookshelf, _>(conn, model_no).await,
    }
}

/// All products of one variant ordered by model number.
pub async fn list_products<C: ConnectionTrait>(
    conn: &C,
    product_type: ProductType,
) -> Result<Vec<ProductSnapshot>, ServiceError> {
    match product_type {
        ProductType::Chair => list_in::<Chair, _>(conn).await,
        ProductType::Bed => list_in::<Bed, _>(conn).await,
        ProductType::Bookshelf => list_in::<Bookshelf, _>(conn).await,
    }
}

/// Writes a catalog record into its variant's table.
///
/// The location must already be validated; uniqueness of `model_no` is left
/// to the caller and the unique index.
pub async fn insert_record<C: ConnectionTrait>(
    conn: &C,
    record: &ProductRecord,
    location: WarehouseLocation,
) -> Result<ProductSnapshot, ServiceError> {
    let base = record.base();
    let snapshot = match record {
        ProductRecord::Chair(record) => {
            let model = chair::ActiveModel {
                category: Set(base.category.clone()),
                warehouse_location: Set(location),
                model_no: Set(base.model_no.clone()),
                stock_level: Set(base.stock_level),
                price: Set(base.price),
                material: Set(base.material.clone()),
                width: Set(base.width),
                height: Set(base.height),
                depth: Set(base.depth),
                has_armrests: Set(record.has_armrests),
                max_weight: Set(record.max_weight),
                has_sitting_pad: Set(record.has_sitting_pad),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            Chair::snapshot(model)
        }
        ProductRecord::Bed(record) => {
            let model = bed::ActiveModel {
                category: Set(base.category.clone()),
                warehouse_location: Set(location),
                model_no: Set(base.model_no.clone()),
                stock_level: Set(base.stock_level),
                price: Set(base.price),
                material: Set(base.material.clone()),
                width: Set(base.width),
                height: Set(base.height),
                depth: Set(base.depth),
                bed_size: Set(record.bed_size.clone()),
                has_headboard: Set(record.has_headboard),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            Bed::snapshot(model)
        }
        ProductRecord::Bookshelf(record) => {
            let model = bookshelf::ActiveModel {
                category: Set(base.category.clone()),
                warehouse_location: Set(location),
                model_no: Set(base.model_no.clone()),
                stock_level: Set(base.stock_level),
                price: Set(base.price),
                material: Set(base.material.clone()),
                width: Set(base.width),
                height: Set(base.height),
                depth: Set(base.depth),
                shelf_layers: Set(record.shelf_layers),
                maximum_weight: Set(record.maximum_weight),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            Bookshelf::snapshot(model)
        }
    };
    Ok(snapshot)
}
