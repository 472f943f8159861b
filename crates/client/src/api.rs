use async_trait::async_trait;
use cookapp_shared::{
    DateRange, FridgeItem, Ingredient, MealType, NewFridgeItem, NewIngredient, NewRecipe,
    NewScheduleEntry, Recipe, ScheduleEntry,
};

use crate::{ApiRequest, AuthenticatedClient, Result, Transport};

/// List endpoints return 100 rows unless asked for more.
const LIST_LIMIT: &str = "1000";

/// Read side of the backend.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn ingredients(&self) -> Result<Vec<Ingredient>>;

    async fn recipes(&self) -> Result<Vec<Recipe>>;

    async fn meal_types(&self) -> Result<Vec<MealType>>;

    async fn fridge_items(&self) -> Result<Vec<FridgeItem>>;

    /// Schedule entries, limited to `range` (inclusive) when given.
    async fn schedule(&self, range: Option<DateRange>) -> Result<Vec<ScheduleEntry>>;
}

/// Write side of the backend.
#[async_trait]
pub trait Mutations: Send + Sync {
    async fn create_ingredient(&self, input: &NewIngredient) -> Result<Ingredient>;
    async fn update_ingredient(&self, id: i64, input: &NewIngredient) -> Result<Ingredient>;
    async fn delete_ingredient(&self, id: i64) -> Result<()>;

    async fn create_recipe(&self, input: &NewRecipe) -> Result<Recipe>;
    async fn update_recipe(&self, id: i64, input: &NewRecipe) -> Result<Recipe>;
    async fn delete_recipe(&self, id: i64) -> Result<()>;

    async fn create_fridge_item(&self, input: &NewFridgeItem) -> Result<FridgeItem>;
    async fn update_fridge_item(&self, id: i64, input: &NewFridgeItem) -> Result<FridgeItem>;
    async fn delete_fridge_item(&self, id: i64) -> Result<()>;

    async fn create_schedule_entry(&self, input: &NewScheduleEntry) -> Result<ScheduleEntry>;
    async fn update_schedule_entry(
        &self,
        id: i64,
        input: &NewScheduleEntry,
    ) -> Result<ScheduleEntry>;
    async fn delete_schedule_entry(&self, id: i64) -> Result<()>;
}

/// REST rendition of [`DataSource`] and [`Mutations`].
pub struct RestApi<T> {
    client: AuthenticatedClient<T>,
}

impl<T> Clone for RestApi<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<T: Transport> RestApi<T> {
    pub fn new(client: AuthenticatedClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AuthenticatedClient<T> {
        &self.client
    }

    fn list(path: &str) -> ApiRequest {
        ApiRequest::get(path).query("limit", LIST_LIMIT)
    }
}

#[async_trait]
impl<T: Transport> DataSource for RestApi<T> {
    async fn ingredients(&self) -> Result<Vec<Ingredient>> {
        self.client.fetch(Self::list("/ingredients/")).await
    }

    async fn recipes(&self) -> Result<Vec<Recipe>> {
        self.client.fetch(Self::list("/recipes/")).await
    }

    async fn meal_types(&self) -> Result<Vec<MealType>> {
        self.client.fetch(Self::list("/meal_types/")).await
    }

    async fn fridge_items(&self) -> Result<Vec<FridgeItem>> {
        self.client.fetch(Self::list("/fridge_items/")).await
    }

    async fn schedule(&self, range: Option<DateRange>) -> Result<Vec<ScheduleEntry>> {
        let mut request = Self::list("/schedule/");
        if let Some(range) = range {
            request = request.extend_query(range.to_query());
        }

        let entries: Vec<ScheduleEntry> = self.client.fetch(request).await?;

        Ok(match range {
            Some(range) => entries
                .into_iter()
                .filter(|entry| range.contains(entry.date))
                .collect(),
            None => entries,
        })
    }
}

#[async_trait]
impl<T: Transport> Mutations for RestApi<T> {
    async fn create_ingredient(&self, input: &NewIngredient) -> Result<Ingredient> {
        let request = ApiRequest::post("/ingredients/").json(input)?;
        self.client.fetch(request).await
    }

    async fn update_ingredient(&self, id: i64, input: &NewIngredient) -> Result<Ingredient> {
        let request = ApiRequest::put(format!("/ingredients/{id}")).json(input)?;
        self.client.fetch(request).await
    }

    async fn delete_ingredient(&self, id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(format!("/ingredients/{id}/")))
            .await
    }

    async fn create_recipe(&self, input: &NewRecipe) -> Result<Recipe> {
        let request = ApiRequest::post("/recipes/").json(input)?;
        self.client.fetch(request).await
    }

    async fn update_recipe(&self, id: i64, input: &NewRecipe) -> Result<Recipe> {
        let request = ApiRequest::put(format!("/recipes/{id}")).json(input)?;
        self.client.fetch(request).await
    }

    async fn delete_recipe(&self, id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(format!("/recipes/{id}")))
            .await
    }

    async fn create_fridge_item(&self, input: &NewFridgeItem) -> Result<FridgeItem> {
        let request = ApiRequest::post("/fridge_items/").json(input)?;
        self.client.fetch(request).await
    }

    async fn update_fridge_item(&self, id: i64, input: &NewFridgeItem) -> Result<FridgeItem> {
        let request = ApiRequest::put(format!("/fridge_items/{id}")).json(input)?;
        self.client.fetch(request).await
    }

    async fn delete_fridge_item(&self, id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(format!("/fridge_items/{id}")))
            .await
    }

    async fn create_schedule_entry(&self, input: &NewScheduleEntry) -> Result<ScheduleEntry> {
        let request = ApiRequest::post("/schedule/").json(input)?;
        self.client.fetch(request).await
    }

    async fn update_schedule_entry(
        &self,
        id: i64,
        input: &NewScheduleEntry,
    ) -> Result<ScheduleEntry> {
        let request = ApiRequest::put(format!("/schedule/{id}")).json(input)?;
        self.client.fetch(request).await
    }

    async fn delete_schedule_entry(&self, id: i64) -> Result<()> {
        self.client
            .execute(ApiRequest::delete(format!("/schedule/{id}")))
            .await
    }
}
