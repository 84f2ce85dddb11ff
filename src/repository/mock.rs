use mockall::mock;

use super::{
    AdminReader, BlogPostReader, CategoryReader, ProductReader, RepositoryResult,
    SubmissionReader, SubmissionWriter,
};
use crate::domain::{
    admin::Admin,
    blog_post::{BlogPost, BlogPostListQuery},
    category::Category,
    product::{Product, ProductListQuery},
    submission::{NewSubmission, Submission, SubmissionListQuery},
};

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>>;
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    }
}

mock! {
    pub SubmissionReader {}

    impl SubmissionReader for SubmissionReader {
        fn get_submission_by_id(&self, id: i32) -> RepositoryResult<Option<Submission>>;
        fn list_submissions(&self, query: SubmissionListQuery) -> RepositoryResult<(usize, Vec<Submission>)>;
    }
}

mock! {
    pub SubmissionWriter {}

    impl SubmissionWriter for SubmissionWriter {
        fn create_submission(&self, new_submission: &NewSubmission) -> RepositoryResult<Submission>;
    }
}

mock! {
    pub BlogPostReader {}

    impl BlogPostReader for BlogPostReader {
        fn get_blog_post_by_slug(&self, slug: &str) -> RepositoryResult<Option<BlogPost>>;
        fn list_blog_posts(&self, query: BlogPostListQuery) -> RepositoryResult<(usize, Vec<BlogPost>)>;
    }
}

mock! {
    pub AdminReader {}

    impl AdminReader for AdminReader {
        fn get_admin_by_email(&self, email: &str) -> RepositoryResult<Option<Admin>>;
    }
}
