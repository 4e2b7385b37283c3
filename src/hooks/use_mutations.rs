use crate::hooks::use_mutation::{MutationHandle, use_mutation};
use crate::models::{
    indoor::{IndoorCreateRequest, IndoorDetail, IndoorUpdateRequest, IndoorUpdateResponse},
    plant::{Plant, PlantCreateRequest, PlantWaterRequest, WaterPlantResponse},
};
use yew::prelude::*;

/// Records a watering event: `(plant_id, request)`
#[hook]
pub fn use_water_plant() -> MutationHandle<(String, PlantWaterRequest), WaterPlantResponse> {
    use_mutation(|client, (plant_id, request): (String, PlantWaterRequest)| async move {
        client.water_plant(&plant_id, &request).await
    })
}

#[hook]
pub fn use_create_indoor() -> MutationHandle<IndoorCreateRequest, IndoorDetail> {
    use_mutation(|client, request: IndoorCreateRequest| async move {
        client.create_indoor(&request).await
    })
}

#[hook]
pub fn use_create_plant() -> MutationHandle<PlantCreateRequest, Plant> {
    use_mutation(|client, request: PlantCreateRequest| async move {
        client.create_plant(&request).await
    })
}

/// Partial update of an indoor's settings: `(indoor_id, request)`
#[hook]
pub fn use_update_indoor() -> MutationHandle<(String, IndoorUpdateRequest), IndoorUpdateResponse> {
    use_mutation(
        |client, (indoor_id, request): (String, IndoorUpdateRequest)| async move {
            client.update_indoor(&indoor_id, &request).await
        },
    )
}
