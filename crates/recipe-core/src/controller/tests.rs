//! Controller Integration Tests
//!
//! Drives the page controllers and the session against an in-memory API.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;

    use async_trait::async_trait;

    use crate::api::{ContentApi, RecipeApi, UserApi};
    use crate::config::ClientConfig;
    use crate::controller::{
        ListKind, LoginController, NewUserController, RecipeController, RecipeState,
        SearchController, SubmitBlocked, SubmitRequest,
    };
    use crate::domain::{
        LoginForm, NewUserForm, Recipe, RecipeId, RecipeSummary, SearchPage, SearchQuery,
        UserInfo,
    };
    use crate::error::{ApiError, ApiResult};
    use crate::route::Route;
    use crate::session::{Session, DEFAULT_DISCLAIMER};
    use crate::validation::{Field, Violation};

    #[derive(Default)]
    struct MockApi {
        recipes: RefCell<BTreeMap<i64, Recipe>>,
        next_id: Cell<i64>,
        fail_with: RefCell<Option<ApiError>>,
        signed_in: RefCell<Option<UserInfo>>,
        whoami_calls: Cell<u32>,
        static_calls: Cell<u32>,
        static_text: RefCell<Option<String>>,
        calls: RefCell<Vec<String>>,
    }

    impl MockApi {
        fn with_recipe(recipe: Recipe) -> Self {
            let api = MockApi::default();
            let id = recipe.id.expect("fixture recipe has an id");
            api.recipes.borrow_mut().insert(id, recipe);
            api.next_id.set(id + 1);
            api
        }

        fn fail_next(&self, err: ApiError) {
            *self.fail_with.borrow_mut() = Some(err);
        }

        fn check(&self, call: String) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            match self.fail_with.borrow_mut().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl RecipeApi for MockApi {
        async fn get_recipe(&self, id: i64) -> ApiResult<Recipe> {
            self.check(format!("GET {}", id))?;
            self.recipes
                .borrow()
                .get(&id)
                .cloned()
                .ok_or(ApiError::NotFound)
        }

        async fn create_recipe(&self, recipe: &Recipe) -> ApiResult<RecipeId> {
            self.check("POST".to_string())?;
            let id = self.next_id.get().max(1);
            self.next_id.set(id + 1);
            let mut stored = recipe.clone();
            stored.id = Some(id);
            self.recipes.borrow_mut().insert(id, stored);
            Ok(RecipeId { id })
        }

        async fn update_recipe(&self, id: i64, recipe: &Recipe) -> ApiResult<RecipeId> {
            self.check(format!("PUT {}", id))?;
            let mut recipes = self.recipes.borrow_mut();
            if !recipes.contains_key(&id) {
                return Err(ApiError::NotFound);
            }
            recipes.insert(id, recipe.clone());
            Ok(RecipeId { id })
        }

        async fn delete_recipe(&self, id: i64) -> ApiResult<()> {
            self.check(format!("DELETE {}", id))?;
            self.recipes
                .borrow_mut()
                .remove(&id)
                .map(|_| ())
                .ok_or(ApiError::NotFound)
        }

        async fn list_recipes(&self, query: &SearchQuery) -> ApiResult<SearchPage> {
            self.check(format!("LIST {} {} {}", query.text, query.page_size, query.page_number))?;
            let matching: Vec<RecipeSummary> = self
                .recipes
                .borrow()
                .values()
                .filter(|r| r.name.contains(&query.text))
                .map(|r| RecipeSummary {
                    id: r.id.unwrap_or_default(),
                    name: r.name.clone(),
                    prep_time: r.prep_time.clone(),
                    cook_time: r.cook_time.clone(),
                    servings: r.servings,
                })
                .collect();
            let total = matching.len() as u64;
            let start = (query.page_number * query.page_size) as usize;
            let results = matching
                .into_iter()
                .skip(start)
                .take(query.page_size as usize)
                .collect();
            Ok(SearchPage { results, total })
        }
    }

    #[async_trait(?Send)]
    impl UserApi for MockApi {
        async fn create_user(&self, form: &NewUserForm) -> ApiResult<()> {
            self.check(format!("CREATE USER {}", form.username))
        }

        async fn login(&self, form: &LoginForm) -> ApiResult<()> {
            self.check(format!("LOGIN {}", form.username))?;
            *self.signed_in.borrow_mut() = Some(UserInfo {
                id: "u1".to_string(),
                username: form.username.clone(),
                email: None,
            });
            Ok(())
        }

        async fn logout(&self) -> ApiResult<()> {
            self.check("LOGOUT".to_string())?;
            *self.signed_in.borrow_mut() = None;
            Ok(())
        }

        async fn whoami(&self) -> ApiResult<UserInfo> {
            self.whoami_calls.set(self.whoami_calls.get() + 1);
            self.signed_in.borrow().clone().ok_or(ApiError::Unauthorized)
        }
    }

    #[async_trait(?Send)]
    impl ContentApi for MockApi {
        async fn static_text(&self) -> ApiResult<String> {
            self.static_calls.set(self.static_calls.get() + 1);
            self.static_text
                .borrow()
                .clone()
                .ok_or(ApiError::Network("unreachable".to_string()))
        }
    }

    fn stored_recipe(id: i64) -> Recipe {
        Recipe {
            id: Some(id),
            name: "Bread".to_string(),
            prep_time: "00:15".to_string(),
            cook_time: "00:45".to_string(),
            servings: Some(2),
            note: "Let it rest".to_string(),
            ingredients: vec!["flour".to_string(), "water".to_string()],
            steps: vec!["mix".to_string(), "bake".to_string()],
            tags: Vec::new(),
        }
    }

    // ========================
    // Recipe lifecycle
    // ========================

    #[test]
    fn test_new_recipe_is_ready_with_one_blank_row_per_list() {
        let controller = RecipeController::new();
        assert_eq!(controller.state(), RecipeState::Ready);
        assert!(controller.is_new());
        for kind in ListKind::ALL {
            assert_eq!(controller.form().list(kind).as_slice(), &[String::new()]);
        }
        assert!(!controller.can_delete());
    }

    #[tokio::test]
    async fn test_existing_recipe_loads_then_is_ready() {
        let api = MockApi::with_recipe(stored_recipe(7));
        let mut controller = RecipeController::for_id(7);
        assert_eq!(controller.state(), RecipeState::Loading);
        assert!(!controller.is_interactive());
        assert!(controller.form_mut().is_none());

        controller.load(&api).await;

        assert_eq!(controller.state(), RecipeState::Ready);
        assert_eq!(controller.form().name, "Bread");
        assert_eq!(controller.form().servings, Some(2));
        assert_eq!(controller.form().ingredients.len(), 2);
        // empty tag list from the server still shows one row
        assert_eq!(controller.form().tags.as_slice(), &[String::new()]);
        assert!(controller.can_delete());
    }

    #[tokio::test]
    async fn test_failed_load_stays_loading_with_error() {
        let api = MockApi::default();
        let mut controller = RecipeController::for_id(99);
        controller.load(&api).await;
        assert_eq!(controller.state(), RecipeState::Loading);
        assert_eq!(controller.last_error(), Some(&ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_submit_new_recipe_creates_and_navigates() {
        let api = MockApi::default();
        let mut controller = RecipeController::new();
        {
            let form = controller.form_mut().unwrap();
            form.name = "Soup".to_string();
            form.ingredients.set(0, "carrots");
            form.ingredients.append();
            form.ingredients.set(1, "onion");
        }

        let next = controller.submit(&api).await;

        assert_eq!(next, Some(Route::ViewRecipe(1)));
        assert_eq!(controller.state(), RecipeState::Submitted(1));
        assert_eq!(api.calls(), vec!["POST"]);
        let stored = api.recipes.borrow().get(&1).cloned().unwrap();
        assert_eq!(stored.ingredients, vec!["carrots", "onion"]);
    }

    #[tokio::test]
    async fn test_submit_existing_recipe_updates_by_id() {
        let api = MockApi::with_recipe(stored_recipe(7));
        let mut controller = RecipeController::for_id(7);
        controller.load(&api).await;
        controller.form_mut().unwrap().name = "Rye Bread".to_string();

        let request = controller.prepare_submit().unwrap();
        assert!(matches!(request, SubmitRequest::Update(7, _)));
        assert!(controller.is_busy());
        assert_eq!(controller.prepare_submit(), Err(SubmitBlocked::Busy));

        let result = request.send(&api).await;
        assert_eq!(controller.complete_submit(result), Some(Route::ViewRecipe(7)));
        assert_eq!(api.recipes.borrow()[&7].name, "Rye Bread");
    }

    #[tokio::test]
    async fn test_invalid_recipe_never_reaches_network() {
        let api = MockApi::default();
        let mut controller = RecipeController::new();

        assert_eq!(controller.submit(&api).await, None);

        assert_eq!(controller.state(), RecipeState::Ready);
        assert_eq!(controller.errors()[0].field, Field::Name);
        assert!(!controller.is_busy());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_list_error_points_at_first_row() {
        let mut controller = RecipeController::new();
        if let Some(form) = controller.form_mut() {
            form.name = "Salad".to_string();
            for _ in 0..crate::validation::MAX_TAGS {
                form.tags.append();
            }
        }
        let Err(SubmitBlocked::Invalid(errors)) = controller.prepare_submit() else {
            panic!("expected field errors");
        };
        let field = crate::validation::first_invalid(&errors).unwrap();
        let kind = ListKind::for_field(field).unwrap();
        assert_eq!(kind, ListKind::Tags);
        assert_eq!(controller.form().row_input_id(kind, 0).as_deref(), Some("tags[0]"));
        assert_eq!(ListKind::for_field(Field::Name), None);
    }

    #[tokio::test]
    async fn test_failed_submit_stays_ready_for_retry() {
        let api = MockApi::default();
        let mut controller = RecipeController::new();
        controller.form_mut().unwrap().name = "Soup".to_string();

        api.fail_next(ApiError::Network("offline".to_string()));
        assert_eq!(controller.submit(&api).await, None);
        assert_eq!(controller.state(), RecipeState::Ready);
        assert!(controller.last_error().is_some());
        assert!(controller.is_interactive());

        assert_eq!(controller.submit(&api).await, Some(Route::ViewRecipe(1)));
        assert!(controller.last_error().is_none());
    }

    #[tokio::test]
    async fn test_delete_navigates_home() {
        let api = MockApi::with_recipe(stored_recipe(3));
        let mut controller = RecipeController::for_id(3);
        controller.load(&api).await;

        assert_eq!(controller.delete(&api).await, Some(Route::Home));
        assert_eq!(controller.state(), RecipeState::Deleted);
        assert!(api.recipes.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_stays_ready() {
        let api = MockApi::with_recipe(stored_recipe(3));
        let mut controller = RecipeController::for_id(3);
        controller.load(&api).await;

        api.fail_next(ApiError::Status {
            status: 500,
            message: "db locked".to_string(),
        });
        assert_eq!(controller.delete(&api).await, None);
        assert_eq!(controller.state(), RecipeState::Ready);
        assert_eq!(api.recipes.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unavailable_for_new_recipe() {
        let api = MockApi::default();
        let mut controller = RecipeController::new();
        assert_eq!(controller.delete(&api).await, None);
        assert!(api.calls().is_empty());
    }

    // ========================
    // Search
    // ========================

    #[tokio::test]
    async fn test_search_pages_through_backend() {
        let api = MockApi::default();
        for i in 0..45 {
            let mut recipe = stored_recipe(i + 1);
            recipe.name = format!("Soup {}", i);
            api.recipes.borrow_mut().insert(i + 1, recipe);
        }
        let mut search = SearchController::new(&ClientConfig::default());

        let request = search.mount();
        assert!(search.run(request, &api).await);
        assert_eq!(search.total(), 45);
        assert_eq!(search.results().len(), 20);

        let request = search.next_page().unwrap();
        search.run(request, &api).await;
        let request = search.next_page().unwrap();
        search.run(request, &api).await;

        assert_eq!(search.query().page_number, 2);
        assert_eq!(search.results().len(), 5);
        assert!(!search.can_next());
        assert_eq!(
            api.calls(),
            vec!["LIST  20 0", "LIST  20 1", "LIST  20 2"]
        );
    }

    // ========================
    // Account forms and session
    // ========================

    #[tokio::test]
    async fn test_new_user_with_space_is_rejected_locally() {
        let api = MockApi::default();
        let mut controller = NewUserController::new(NewUserForm {
            username: "bad user".to_string(),
            email: "cook@example.com".to_string(),
            password: "secret1".to_string(),
            verify_password: "secret1".to_string(),
        });

        assert_eq!(controller.submit(&api).await, None);
        assert_eq!(controller.first_invalid(), Some(Field::Username));
        assert_eq!(
            controller.error_for(Field::Username).map(|e| e.violation),
            Some(Violation::ContainsSpace)
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_new_user_goes_to_login() {
        let api = MockApi::default();
        let mut controller = NewUserController::new(NewUserForm {
            username: "cook".to_string(),
            email: "cook@example.com".to_string(),
            password: "secret1".to_string(),
            verify_password: "secret1".to_string(),
        });
        assert_eq!(controller.submit(&api).await, Some(Route::Login));
        assert_eq!(api.calls(), vec!["CREATE USER cook"]);
    }

    #[tokio::test]
    async fn test_login_fills_session_user() {
        let api = MockApi::default();
        let session = Session::new();
        let mut controller = LoginController::new(LoginForm {
            username: "cook".to_string(),
            password: "secret1".to_string(),
        });

        assert_eq!(controller.submit(&session, &api).await, Some(Route::Home));
        assert_eq!(session.cached_user().map(|u| u.username), Some("cook".to_string()));
    }

    #[tokio::test]
    async fn test_failed_login_surfaces_error() {
        let api = MockApi::default();
        let session = Session::new();
        let mut controller = LoginController::new(LoginForm {
            username: "cook".to_string(),
            password: "secret1".to_string(),
        });
        api.fail_next(ApiError::Unauthorized);

        assert_eq!(controller.submit(&session, &api).await, None);
        assert_eq!(controller.last_error(), Some(&ApiError::Unauthorized));
        assert!(!controller.is_busy());
        assert!(session.cached_user().is_none());
    }

    #[tokio::test]
    async fn test_user_is_fetched_once_then_cached() {
        let api = MockApi::default();
        *api.signed_in.borrow_mut() = Some(UserInfo {
            id: "u1".to_string(),
            username: "cook".to_string(),
            email: None,
        });
        let session = Session::new();

        assert!(session.current_user(&api).await.unwrap().is_some());
        assert!(session.current_user(&api).await.unwrap().is_some());
        assert_eq!(api.whoami_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_auth_failure_invalidates_user() {
        let api = MockApi::default();
        *api.signed_in.borrow_mut() = Some(UserInfo::default());
        let session = Session::new();
        session.current_user(&api).await.unwrap();

        session.observe_error(&ApiError::NotFound);
        assert!(session.cached_user().is_some());

        session.observe_error(&ApiError::Unauthorized);
        assert!(session.cached_user().is_none());

        *api.signed_in.borrow_mut() = None;
        assert_eq!(session.current_user(&api).await.unwrap(), None);
        assert_eq!(api.whoami_calls.get(), 2);
    }

    #[tokio::test]
    async fn test_logout_clears_user_even_on_failure() {
        let api = MockApi::default();
        *api.signed_in.borrow_mut() = Some(UserInfo::default());
        let session = Session::new();
        session.current_user(&api).await.unwrap();

        api.fail_next(ApiError::Network("offline".to_string()));
        assert!(session.logout(&api).await.is_err());
        assert!(session.cached_user().is_none());
    }

    #[tokio::test]
    async fn test_static_text_is_memoized() {
        let api = MockApi::default();
        *api.static_text.borrow_mut() = Some("cookie notice".to_string());
        let session = Session::new();

        assert_eq!(session.disclaimer(&api).await, "cookie notice");
        *api.static_text.borrow_mut() = Some("changed".to_string());
        assert_eq!(session.disclaimer(&api).await, "cookie notice");
        assert_eq!(api.static_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_static_text_falls_back_when_unreachable() {
        let api = MockApi::default();
        let session = Session::new();
        assert_eq!(session.disclaimer(&api).await, DEFAULT_DISCLAIMER);
    }
}
