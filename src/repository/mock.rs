use mockall::mock;

use super::{
    CategoryReader, CategoryWriter, FeedbackReader, FeedbackWriter, ProductFeedbackReader,
    ProductFeedbackWriter, ProductReader, ProductWriter, RepositoryResult, TagReader, TagWriter,
};
use crate::domain::{
    category::{Category, CategoryListQuery, NewCategory},
    feedback::{Feedback, FeedbackListQuery, NewFeedback},
    product::{NewProduct, Product, ProductListQuery},
    product_feedback::{NewProductFeedback, ProductFeedback, ProductFeedbackListQuery},
    tag::{NewTag, Tag},
};

mock! {
    pub FeedbackRepo {}

    impl FeedbackReader for FeedbackRepo {
        fn list_feedback(&self, query: FeedbackListQuery) -> RepositoryResult<Vec<Feedback>>;
    }

    impl FeedbackWriter for FeedbackRepo {
        fn create_feedback(&self, new_feedback: &NewFeedback) -> RepositoryResult<Feedback>;
    }
}

mock! {
    pub CategoryRepo {}

    impl CategoryReader for CategoryRepo {
        fn list_categories(&self, query: CategoryListQuery) -> RepositoryResult<Vec<Category>>;
    }

    impl CategoryWriter for CategoryRepo {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    }
}

mock! {
    pub TagReader {}

    impl TagReader for TagReader {
        fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    }
}

mock! {
    pub TagWriter {}

    impl TagWriter for TagWriter {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    }
}

mock! {
    pub ProductRepo {}

    impl ProductReader for ProductRepo {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }

    impl ProductWriter for ProductRepo {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn archive_product(&self, product_id: i32) -> RepositoryResult<Product>;
    }
}

mock! {
    pub ProductFeedbackRepo {}

    impl ProductReader for ProductFeedbackRepo {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }

    impl ProductFeedbackReader for ProductFeedbackRepo {
        fn list_product_feedback(&self, query: ProductFeedbackListQuery) -> RepositoryResult<Vec<ProductFeedback>>;
    }

    impl ProductFeedbackWriter for ProductFeedbackRepo {
        fn create_product_feedback(&self, new_feedback: &NewProductFeedback) -> RepositoryResult<ProductFeedback>;
    }
}
