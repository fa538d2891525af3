// Fixture for the pipeline tests. Parsed, never compiled.

pub struct MyApi;

pub struct OtherApi;

pub struct ProfileParams {
    #[apivalidator = "required"]
    pub login: String,
}

pub struct CreateParams {
    #[apivalidator = "required,min=10"]
    pub login: String,
    #[apivalidator = "paramname=full_name"]
    pub name: String,
    #[apivalidator = "enum=user|moderator|admin,default=user"]
    pub status: String,
    #[apivalidator = "min=0,max=128"]
    pub age: i32,
}

pub struct OtherCreateParams {
    #[apivalidator = "required,min=3"]
    pub username: String,
    #[apivalidator = "paramname=account_name"]
    pub name: String,
    #[apivalidator = "enum=warrior|sorcerer|rouge,default=warrior"]
    pub class: String,
    #[apivalidator = "min=1,max=50"]
    pub level: u8,
}

impl MyApi {
    /// apigen:api {"url": "/user/profile", "auth": false}
    pub fn profile(&self, ctx: &RequestContext, params: ProfileParams) -> anyhow::Result<User> {
        todo!()
    }

    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(&self, ctx: &RequestContext, params: CreateParams) -> anyhow::Result<NewUser> {
        todo!()
    }
}

impl OtherApi {
    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(&self, ctx: &RequestContext, params: OtherCreateParams) -> anyhow::Result<OtherUser> {
        todo!()
    }
}
