//! Recipe Lifecycle
//!
//! Loading → Ready → Submitted | Deleted. A controller built without an id
//! starts Ready with a blank form; one built with an id starts Loading
//! until the fetch lands. Failed submits and deletes leave it Ready.

use super::SubmitBlocked;
use crate::api::RecipeApi;
use crate::domain::{Recipe, RecipeId};
use crate::error::{ApiError, ApiResult};
use crate::list::EditableList;
use crate::route::Route;
use crate::validation::{Field, Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeState {
    /// Waiting for `GET /api/v1/recipe/{id}`; the form is not interactive
    Loading,
    Ready,
    /// Saved under the given id
    Submitted(i64),
    Deleted,
}

/// The three list editors on a recipe form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Ingredients,
    Steps,
    Tags,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Ingredients, ListKind::Steps, ListKind::Tags];

    /// Prefix for row input ids
    pub fn name(&self) -> &'static str {
        match self {
            ListKind::Ingredients => "ingredients",
            ListKind::Steps => "steps",
            ListKind::Tags => "tags",
        }
    }

    /// Field its validation errors are reported under
    pub fn field(&self) -> Field {
        match self {
            ListKind::Ingredients => Field::Ingredients,
            ListKind::Steps => Field::Steps,
            ListKind::Tags => Field::Tags,
        }
    }

    pub fn for_field(field: Field) -> Option<ListKind> {
        ListKind::ALL.into_iter().find(|kind| kind.field() == field)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ListKind::Ingredients => "Ingredients",
            ListKind::Steps => "Steps",
            ListKind::Tags => "Tags",
        }
    }
}

/// Recipe form state, with list editors in place of plain vectors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub id: Option<i64>,
    pub name: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: Option<u32>,
    pub note: String,
    pub ingredients: EditableList,
    pub steps: EditableList,
    pub tags: EditableList,
}

impl RecipeForm {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn list(&self, kind: ListKind) -> &EditableList {
        match kind {
            ListKind::Ingredients => &self.ingredients,
            ListKind::Steps => &self.steps,
            ListKind::Tags => &self.tags,
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut EditableList {
        match kind {
            ListKind::Ingredients => &mut self.ingredients,
            ListKind::Steps => &mut self.steps,
            ListKind::Tags => &mut self.tags,
        }
    }

    /// Input id of a list row, e.g. `steps[0]`
    pub fn row_input_id(&self, kind: ListKind, index: usize) -> Option<String> {
        self.list(kind).row(index).map(|row| row.input_id(kind.name()))
    }

    /// Payload for create/update
    pub fn to_recipe(&self) -> Recipe {
        Recipe {
            id: self.id,
            name: self.name.clone(),
            prep_time: self.prep_time.clone(),
            cook_time: self.cook_time.clone(),
            servings: self.servings,
            note: self.note.clone(),
            ingredients: self.ingredients.as_slice().to_vec(),
            steps: self.steps.as_slice().to_vec(),
            tags: self.tags.as_slice().to_vec(),
        }
    }
}

impl From<Recipe> for RecipeForm {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            note: recipe.note,
            ingredients: EditableList::from_vec(recipe.ingredients),
            steps: EditableList::from_vec(recipe.steps),
            tags: EditableList::from_vec(recipe.tags),
        }
    }
}

/// Upsert chosen by the presence of an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(Recipe),
    Update(i64, Recipe),
}

impl SubmitRequest {
    pub async fn send<A: RecipeApi + ?Sized>(&self, api: &A) -> ApiResult<RecipeId> {
        match self {
            SubmitRequest::Create(recipe) => api.create_recipe(recipe).await,
            SubmitRequest::Update(id, recipe) => api.update_recipe(*id, recipe).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeController {
    state: RecipeState,
    form: RecipeForm,
    errors: Vec<ValidationError>,
    last_error: Option<ApiError>,
    busy: bool,
}

impl Default for RecipeController {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeController {
    /// Blank recipe, ready for input
    pub fn new() -> Self {
        Self {
            state: RecipeState::Ready,
            form: RecipeForm::blank(),
            errors: Vec::new(),
            last_error: None,
            busy: false,
        }
    }

    /// Existing recipe; call [`load`](Self::load) or the prepare/complete pair
    pub fn for_id(id: i64) -> Self {
        Self {
            state: RecipeState::Loading,
            form: RecipeForm {
                id: Some(id),
                ..RecipeForm::blank()
            },
            ..Self::new()
        }
    }

    pub fn for_route_id(id: Option<i64>) -> Self {
        id.map(Self::for_id).unwrap_or_default()
    }

    pub fn state(&self) -> RecipeState {
        self.state
    }

    pub fn form(&self) -> &RecipeForm {
        &self.form
    }

    /// Mutable access to the form; edits are only honored while Ready
    pub fn form_mut(&mut self) -> Option<&mut RecipeForm> {
        (self.state == RecipeState::Ready).then_some(&mut self.form)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    pub fn is_new(&self) -> bool {
        self.form.id.is_none()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_interactive(&self) -> bool {
        self.state == RecipeState::Ready && !self.busy
    }

    /// Delete is only offered for stored recipes
    pub fn can_delete(&self) -> bool {
        self.is_interactive() && self.form.id.is_some()
    }

    /// Id to fetch while Loading
    pub fn pending_load(&self) -> Option<i64> {
        match self.state {
            RecipeState::Loading => self.form.id,
            _ => None,
        }
    }

    pub fn complete_load(&mut self, result: ApiResult<Recipe>) {
        if self.state != RecipeState::Loading {
            return;
        }
        match result {
            Ok(recipe) => {
                let requested = self.form.id;
                self.form = RecipeForm::from(recipe);
                if self.form.id.is_none() {
                    self.form.id = requested;
                }
                self.last_error = None;
                self.state = RecipeState::Ready;
            }
            Err(err) => {
                log::error!("failed to load recipe {:?}: {}", self.form.id, err);
                self.last_error = Some(err);
            }
        }
    }

    pub async fn load<A: RecipeApi + ?Sized>(&mut self, api: &A) {
        if let Some(id) = self.pending_load() {
            let result = api.get_recipe(id).await;
            self.complete_load(result);
        }
    }

    /// Validate and build the upsert; marks the controller busy
    pub fn prepare_submit(&mut self) -> Result<SubmitRequest, SubmitBlocked> {
        if self.state != RecipeState::Ready {
            return Err(SubmitBlocked::NotReady);
        }
        if self.busy {
            return Err(SubmitBlocked::Busy);
        }
        let recipe = self.form.to_recipe();
        self.errors = recipe.validate();
        if !self.errors.is_empty() {
            log::warn!("recipe submit rejected: {} field error(s)", self.errors.len());
            return Err(SubmitBlocked::Invalid(self.errors.clone()));
        }
        self.busy = true;
        self.last_error = None;
        Ok(match self.form.id {
            Some(id) => SubmitRequest::Update(id, recipe),
            None => SubmitRequest::Create(recipe),
        })
    }

    /// Apply the upsert response; on success, the detail page to show
    pub fn complete_submit(&mut self, result: ApiResult<RecipeId>) -> Option<Route> {
        self.busy = false;
        match result {
            Ok(RecipeId { id }) => {
                self.form.id = Some(id);
                self.state = RecipeState::Submitted(id);
                Some(Route::ViewRecipe(id))
            }
            Err(err) => {
                log::error!("failed to save recipe: {}", err);
                self.last_error = Some(err);
                None
            }
        }
    }

    pub async fn submit<A: RecipeApi + ?Sized>(&mut self, api: &A) -> Option<Route> {
        let request = self.prepare_submit().ok()?;
        let result = request.send(api).await;
        self.complete_submit(result)
    }

    /// Id to delete; marks the controller busy
    pub fn prepare_delete(&mut self) -> Option<i64> {
        if !self.can_delete() {
            return None;
        }
        self.busy = true;
        self.last_error = None;
        self.form.id
    }

    /// Apply the delete response; on success, the page to show next
    pub fn complete_delete(&mut self, result: ApiResult<()>) -> Option<Route> {
        self.busy = false;
        match result {
            Ok(()) => {
                self.state = RecipeState::Deleted;
                Some(Route::Home)
            }
            Err(err) => {
                log::error!("failed to delete recipe {:?}: {}", self.form.id, err);
                self.last_error = Some(err);
                None
            }
        }
    }

    pub async fn delete<A: RecipeApi + ?Sized>(&mut self, api: &A) -> Option<Route> {
        let id = self.prepare_delete()?;
        let result = api.delete_recipe(id).await;
        self.complete_delete(result)
    }

    /// Dismiss the last network error banner
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
